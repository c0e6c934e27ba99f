#![warn(missing_docs)]
//! Rust bindings for the now playing backend and for sharing what is playing

use lazy_static::lazy_static;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::ClientBuilder::new()
        .build()
        .expect("WASM client should succeed");
}

mod client;
pub use client::*;
mod compose;
pub use compose::*;
mod now_playing;
pub use now_playing::*;
mod token;
pub use token::*;
