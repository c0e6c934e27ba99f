#![cfg(target_arch = "wasm32")]

use utils::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

type R = Result<Option<String>, WebStoreError>;

#[wasm_bindgen_test]
fn test_session_store() {
    let mut session = SessionStore::new();
    assert_eq!(session.get("key-1"), R::Ok(None));
    assert_eq!(session.set("key-1", "value-1"), R::Ok(None));
    assert_eq!(session.get("key-1"), R::Ok(Some("value-1".to_string())));
    assert_eq!(session.get("key-2"), R::Ok(None));

    assert_eq!(
        session.set("key-1", "value-2"),
        R::Ok(Some("value-1".to_string()))
    );
    assert_eq!(session.get("key-1"), R::Ok(Some("value-2".to_string())));

    assert_eq!(
        session.remove("key-1"),
        R::Ok(Some("value-2".to_string()))
    );
    assert_eq!(session.get("key-1"), R::Ok(None));
    assert_eq!(session.remove("key-1"), R::Ok(None));
}

#[wasm_bindgen_test]
fn test_local_store_raw_values() {
    let mut local = LocalStore::new();
    assert_eq!(local.set("NPBTN_TOKEN", "XYZ"), R::Ok(None));

    // values are readable by scripts using the same key directly
    let storage = browser_window().local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item("NPBTN_TOKEN").unwrap(),
        Some("XYZ".to_string())
    );

    storage.set_item("NPBTN_TOKEN", "from script").unwrap();
    assert_eq!(
        local.get("NPBTN_TOKEN"),
        R::Ok(Some("from script".to_string()))
    );

    assert_eq!(
        local.remove("NPBTN_TOKEN"),
        R::Ok(Some("from script".to_string()))
    );
    assert_eq!(local.get("NPBTN_TOKEN"), R::Ok(None));
}

#[wasm_bindgen_test]
fn test_browser_location() {
    let location = browser_location();
    let url = Url::from_browser_location().expect("A base URL");
    assert_eq!(url.origin(), location.origin());
    assert_eq!(url.with_path(["np"]).path(), "/np");
}

#[wasm_bindgen_test]
async fn test_request_status_error() {
    let url = Url::from_browser_location()
        .expect("A base URL")
        .with_path(["definitely-not-a-route"]);
    let res: request::Result<Option<()>> =
        request(&reqwest::Client::new(), |client| client.get(url.as_str())).await;
    console_log!("{res:?}");
    assert!(res.is_err());
}
