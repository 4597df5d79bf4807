//! Static JSON store: a single `/json` endpoint returning a fixed document,
//! used as a stand-in HTTP configuration source.

pub mod config;
pub mod error;
pub mod routes;

use std::net::SocketAddr;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use error::StartupError;

pub const JSON_PATH: &str = "/json";

/// Router with the one registered path. Every other path falls through to
/// axum's default 404.
pub fn app() -> Router {
    Router::new()
        .route(JSON_PATH, any(routes::json::handler))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listening socket. No retry and no fallback port.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serves `app` on `listener` until the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
