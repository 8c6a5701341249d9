use std::net::SocketAddr;
use std::path::PathBuf;

use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::SiteConfig;
use crate::error::ServerError;
use crate::security_headers::with_security_headers;

async fn health_check() -> &'static str {
    "OK"
}

/// A path whose last segment has an extension names a file, not a page.
pub fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Answers paths `ServeDir` couldn't find. Page paths get `index.html`;
/// missing assets stay 404.
async fn spa_fallback(State(index): State<PathBuf>, request: Request) -> Response {
    let path = request.uri().path().to_owned();
    if is_asset_path(&path) {
        tracing::debug!("Missing asset {}", path);
        return StatusCode::NOT_FOUND.into_response();
    }
    match ServeFile::new(index).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Serves the built site with `index.html` for unknown page paths.
pub fn build_router(config: &SiteConfig) -> Router {
    let fallback = spa_fallback.with_state(config.index_file());
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(fallback);

    let app = Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site);

    with_security_headers(app, !config.is_development).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_assets_pages_are_not() {
        assert!(is_asset_path("/worklets/rawAudioProcessor.worklet.js"));
        assert!(is_asset_path("/mvmnt-frontend-3f2a.wasm"));
        assert!(is_asset_path("/images/hero-hvac.jpg"));
        assert!(!is_asset_path("/"));
        assert!(!is_asset_path("/pricing"));
        assert!(!is_asset_path("/v1.2/pricing"));
    }
}
