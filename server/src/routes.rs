use std::path::Path;

use axum::{response::Html, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Page shell, the wasm controller takes over from here
const INDEX: &str = include_str!("../templates/index.html");

/// Serves the page shell at `/` and the compiled bundle in `pkg_dir` under `/pkg`
///
/// `/np` and `/spotify/auth` belong to the backend and are not routed here.
pub fn handler(pkg_dir: &Path) -> Router {
    Router::new()
        .route("/", get(get_index))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
}

async fn get_index() -> Html<&'static str> {
    Html(INDEX)
}
