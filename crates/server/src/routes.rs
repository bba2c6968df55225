use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use models::ProductAggregate;
use service::CompositeService;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub composite: Arc<CompositeService>,
}

impl AppState {
    pub fn new(composite: CompositeService) -> Self {
        Self { composite: Arc::new(composite) }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

fn product_id(path: Result<Path<i32>, PathRejection>, uri: &Uri) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        ApiError::new(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text())
    })
}

#[utoipa::path(
    get, path = "/product-composite/{productId}", tag = "composite",
    params(("productId" = i32, Path, description = "Id of the product")),
    responses(
        (status = 200, description = "Aggregate assembled", body = crate::openapi::ProductAggregateDoc),
        (status = 400, description = "Malformed productId", body = crate::openapi::ErrorInfoDoc),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorInfoDoc),
        (status = 422, description = "Invalid input", body = crate::openapi::ErrorInfoDoc),
        (status = 500, description = "Unexpected backend failure", body = crate::openapi::ErrorInfoDoc)
    )
)]
pub async fn get_aggregate(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProductAggregate>, ApiError> {
    let id = product_id(path, &uri)?;
    state
        .composite
        .get_aggregate(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, uri.path()))
}

#[utoipa::path(
    post, path = "/product-composite", tag = "composite",
    request_body = crate::openapi::ProductAggregateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Not implemented", body = crate::openapi::ErrorInfoDoc)
    )
)]
pub async fn create_aggregate(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Json<ProductAggregate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body.map_err(|r| ApiError::new(r.status(), uri.path(), r.body_text()))?;
    state
        .composite
        .create_aggregate(&body)
        .await
        .map(|()| StatusCode::OK)
        .map_err(|e| ApiError::from_service(e, uri.path()))
}

#[utoipa::path(
    delete, path = "/product-composite/{productId}", tag = "composite",
    params(("productId" = i32, Path, description = "Id of the product")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Not implemented", body = crate::openapi::ErrorInfoDoc)
    )
)]
pub async fn delete_aggregate(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = product_id(path, &uri)?;
    state
        .composite
        .delete_aggregate(id)
        .await
        .map(|()| StatusCode::OK)
        .map_err(|e| ApiError::from_service(e, uri.path()))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/product-composite", axum::routing::post(create_aggregate))
        .route(
            "/product-composite/:productId",
            get(get_aggregate).delete(delete_aggregate),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
