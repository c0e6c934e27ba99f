//! Serves the npbtn page and its wasm bundle

mod config;
mod routes;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(pkg_dir = %config.pkg_dir.display(), "npbtn started on http://{addr}");

    axum::serve(listener, routes::handler(&config.pkg_dir))
        .await
        .map_err(anyhow::Error::from)
}
