//! [`Page`] and page load for a real browser window

use crate::app::*;
use utils::{browser_location, browser_window, LocalStore};

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BrowserError {
    NoDocument,
    NoRoot,
    /// A `JsValue` thrown by a DOM call, formatted with `Debug`
    Js(String),
}
impl std::fmt::Display for BrowserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserError::NoDocument => write!(f, "the browser window has no document"),
            BrowserError::NoRoot => write!(f, "no element with id \"{ROOT_ID}\""),
            BrowserError::Js(err) => write!(f, "{err}"),
        }
    }
}
impl std::error::Error for BrowserError {}

fn js_error(err: wasm_bindgen::JsValue) -> BrowserError {
    BrowserError::Js(format!("{err:?}"))
}

/// The current browser window
#[derive(Clone, Debug)]
pub struct BrowserPage {
    window: web_sys::Window,
}

impl BrowserPage {
    /// # Panics
    /// If the browser window doesn't exist.
    pub fn new() -> Self {
        Self {
            window: browser_window(),
        }
    }
}

impl Default for BrowserPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for BrowserPage {
    type Error = BrowserError;

    fn navigate(&mut self, to: &str) -> Result<(), BrowserError> {
        self.window.location().set_href(to).map_err(js_error)
    }

    fn render_nothing_playing(&mut self) -> Result<(), BrowserError> {
        let document = self.window.document().ok_or(BrowserError::NoDocument)?;
        let root = document
            .get_element_by_id(ROOT_ID)
            .ok_or(BrowserError::NoRoot)?;
        let paragraph = document.create_element("p").map_err(js_error)?;
        paragraph.set_text_content(Some(NOTHING_PLAYING));
        root.append_child(&paragraph).map_err(js_error)?;
        Ok(())
    }
}

/// Runs the [`Controller`] against the current location and `localStorage`, then applies the outcome
pub async fn on_loaded() {
    let outcome = match np::Client::from_browser_location() {
        Ok(client) => {
            Controller::default()
                .initialize(&browser_location(), &mut LocalStore::new(), &client)
                .await
        }
        Err(err) => Outcome::Failed(Error::NowPlaying(Box::new(err))),
    };
    apply(outcome, &mut BrowserPage::new());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root() -> web_sys::Element {
        let document = browser_window().document().unwrap();
        match document.get_element_by_id(ROOT_ID) {
            Some(root) => root,
            None => {
                let root = document.create_element("div").unwrap();
                root.set_id(ROOT_ID);
                document.body().unwrap().append_child(&root).unwrap();
                root
            }
        }
    }

    #[wasm_bindgen_test]
    fn test_render_nothing_playing_appends() {
        let root = root();
        root.set_inner_html("<span>existing</span>");

        BrowserPage::new()
            .render_nothing_playing()
            .expect("Root element exists");

        assert_eq!(
            root.inner_html(),
            "<span>existing</span><p>今なにも再生してないっぽい!</p>"
        );
        root.set_inner_html("");
    }

    #[wasm_bindgen_test]
    fn test_apply_nothing_playing() {
        let root = root();
        root.set_inner_html("");

        apply(Outcome::NothingPlaying, &mut BrowserPage::new());
        apply(
            Outcome::Failed(Error::NowPlaying(Box::new(utils::NotABaseError))),
            &mut BrowserPage::new(),
        );

        assert_eq!(root.child_element_count(), 1);
        assert_eq!(
            root.first_element_child().unwrap().text_content(),
            Some(NOTHING_PLAYING.to_string())
        );
        root.set_inner_html("");
    }
}
