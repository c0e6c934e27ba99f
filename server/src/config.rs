//! Server configuration read from the environment

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PKG_DIR: &str = "pkg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `PORT`
    pub port: u16,
    /// `NPBTN_PKG_DIR`, the `wasm-bindgen` output served under `/pkg`
    pub pkg_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a port number
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|err| anyhow::anyhow!("invalid PORT {port:?}: {err}"))?,
            None => DEFAULT_PORT,
        };
        let pkg_dir = var("NPBTN_PKG_DIR").map_or_else(|| PathBuf::from(DEFAULT_PKG_DIR), PathBuf::from);
        Ok(Self { port, pkg_dir })
    }
}
