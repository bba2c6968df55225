use std::net::SocketAddr;

use axum::Router;
use common::{admin_http, observability, utils::service_address::service_address};
use configs::AppConfig;
use service::{Aggregator, CompositeService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Wire clients, aggregator and router from configuration.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let address = service_address(cfg.server.port);
    let aggregator = Aggregator::from_config(cfg, address)?;
    info!(
        composite = aggregator.service_address(),
        product = %cfg.backends.product.url("product"),
        recommendation = %cfg.backends.recommendation.url("recommendation"),
        review = %cfg.backends.review.url("review"),
        "backend clients configured"
    );
    let state = AppState::new(CompositeService::new(aggregator));
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    if cfg.admin.enabled {
        admin_http::spawn_admin_server(&cfg.admin.addr, observability::encode_metrics);
    }

    let app = build_app(&cfg)?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting product composite server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
