#![warn(missing_docs)]
//! [`web_sys`] helper operations

mod store;
pub use store::*;
mod url;
pub use crate::url::*;
pub mod request;
pub use request::request;

/// Browser window wrapper helper consistant errors when using in an invalid context
///
/// # Panics
/// If the browser window doesn't exist.
/// This is typically when used in an invalid context.
pub fn browser_window() -> web_sys::Window {
    web_sys::window().expect("Browser window doesn't exist")
}

/// Returns the current browser location
///
/// # Panics
/// If the browser window doesn't exist or the URL isn't syntactically correct.
/// This is typically when used in an invalid context.
pub fn browser_location() -> ::url::Url {
    ::url::Url::parse(
        &browser_window()
            .location()
            .href()
            .expect("Browser is at a valid URL"),
    )
    .expect("A valid browser location")
}

/// Returns the first value of the query parameter `name` in `url`, if any
pub fn query_param(url: &::url::Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find_map(|(key, value)| (key == name).then(|| value.into_owned()))
}
