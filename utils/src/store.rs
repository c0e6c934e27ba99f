//! Operations for Key-Value storage

use std::collections::HashMap;
use std::fmt::Display;

use super::*;

/// Generic string Key-Value storage API
///
/// Keys are anything [`Display`]able so typed key enums can be used directly.
/// Values are stored verbatim, allowing interop with pages that use the same store.
pub trait Store {
    /// Error from using the store
    type Error;

    /// Stores a key-value pair
    /// Returns previous value if one existed
    fn set<Key>(&mut self, key: &Key, value: &str) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized;

    /// Gets the value stored under key or Ok(None)
    fn get<Key>(&self, key: &Key) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized;

    /// Clears the value stored under key
    /// Returns the value stored under key or Ok(None)
    fn remove<Key>(&mut self, key: &Key) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized;
}

/// Errors for Stores that implement the [Web Storage API](https://developer.mozilla.org/en-US/docs/Web/API/Storage).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum WebStoreError {
    /// [A security error](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage#exceptions) may
    /// occur if accessing the store is prohibited or insecure.
    AccessDenied,
    /// Occurs if the store is full, see more [here](https://developer.mozilla.org/en-US/docs/Web/API/Storage/setItem#exceptions).
    StorageFull,
    /// Undocumented Store Error
    Unknown,
}
impl std::fmt::Display for WebStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WebStoreError::AccessDenied => "access to browser storage was denied",
                WebStoreError::StorageFull => "browser storage is full",
                WebStoreError::Unknown => "undocumented browser storage error",
            }
        )
    }
}
impl std::error::Error for WebStoreError {}

macro_rules! web_store {
    ($web_store_function:ident, $web_store_type:ident) => {
        /// Phantom Type for the [web_sys::Window::$web_store_function] getter
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
        pub struct $web_store_type {}

        impl $web_store_type {
            /// Creates a [$web_store_type] reference
            pub fn new() -> Self {
                Self {}
            }

            fn store(&self) -> Result<web_sys::Storage, WebStoreError> {
                browser_window()
                    .$web_store_function()
                    .map_err(|_| WebStoreError::AccessDenied)?
                    .ok_or(WebStoreError::Unknown)
            }
        }

        impl Store for $web_store_type {
            type Error = WebStoreError;

            fn set<Key>(&mut self, key: &Key, value: &str) -> Result<Option<String>, WebStoreError>
            where
                Key: Display + ?Sized,
            {
                let key = key.to_string();
                let storage = self.store()?;
                let previous = storage
                    .get_item(&key)
                    .map_err(|_| WebStoreError::Unknown)?;
                storage
                    .set_item(&key, value)
                    .map_err(|_| WebStoreError::StorageFull)?;
                log::debug!("Stored value under \"{key}\"");
                Ok(previous)
            }

            fn get<Key>(&self, key: &Key) -> Result<Option<String>, WebStoreError>
            where
                Key: Display + ?Sized,
            {
                self.store()?
                    .get_item(&key.to_string())
                    .map_err(|_| WebStoreError::Unknown)
            }

            fn remove<Key>(&mut self, key: &Key) -> Result<Option<String>, WebStoreError>
            where
                Key: Display + ?Sized,
            {
                let key = key.to_string();
                let storage = self.store()?;
                let previous = storage
                    .get_item(&key)
                    .map_err(|_| WebStoreError::Unknown)?;
                storage
                    .remove_item(&key)
                    .map_err(|_| WebStoreError::Unknown)?;
                Ok(previous)
            }
        }
    };
}

web_store! {session_storage, SessionStore}
web_store! {local_storage, LocalStore}

impl Store for HashMap<String, String> {
    type Error = std::convert::Infallible;

    fn set<Key>(&mut self, key: &Key, value: &str) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized,
    {
        Ok(self.insert(key.to_string(), value.to_owned()))
    }

    fn get<Key>(&self, key: &Key) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized,
    {
        Ok(HashMap::get(self, &key.to_string()).cloned())
    }

    fn remove<Key>(&mut self, key: &Key) -> Result<Option<String>, Self::Error>
    where
        Key: Display + ?Sized,
    {
        Ok(HashMap::remove(self, &key.to_string()))
    }
}
