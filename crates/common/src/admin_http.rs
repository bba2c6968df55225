//! Lightweight admin HTTP server
//!
//! Exposes `/healthz` and `/metrics` endpoints, with metrics provided by caller.

use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

async fn healthz() -> &'static str { "OK" }

/// Admin router; the metrics body is produced by `metrics_fn` on every scrape.
pub fn admin_router(metrics_fn: fn() -> (StatusCode, String)) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || async move { metrics_fn() }))
}

/// Bind `addr` and serve the admin router until the listener fails.
pub async fn serve_admin(addr: &str, metrics_fn: fn() -> (StatusCode, String)) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "admin server listening");
    axum::serve(listener, admin_router(metrics_fn)).await?;
    Ok(())
}

/// Spawn the admin server on the current runtime; failures are logged, never fatal.
pub fn spawn_admin_server(addr: &str, metrics_fn: fn() -> (StatusCode, String)) -> JoinHandle<()> {
    let addr = addr.to_string();
    tokio::spawn(async move {
        if let Err(e) = serve_admin(&addr, metrics_fn).await {
            error!(%addr, error = %e, "admin server stopped");
        }
    })
}
