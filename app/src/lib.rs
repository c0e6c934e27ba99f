//! Shares the track that is currently playing

pub mod app;
pub mod browser;
