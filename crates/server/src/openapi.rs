use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RecommendationSummaryDoc {
    pub recommendation_id: i32,
    pub author: String,
    pub rating: i32,
    pub content: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ReviewSummaryDoc {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

#[derive(ToSchema)]
pub struct ServiceAddressesDoc {
    pub composite: String,
    pub product: String,
    pub recommendation: String,
    pub review: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductAggregateDoc {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    pub recommendations: Vec<RecommendationSummaryDoc>,
    pub reviews: Vec<ReviewSummaryDoc>,
    pub service_addresses: ServiceAddressesDoc,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorInfoDoc {
    pub timestamp: String,
    pub path: String,
    pub http_status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::get_aggregate,
        crate::routes::create_aggregate,
        crate::routes::delete_aggregate,
    ),
    components(
        schemas(
            HealthResponse,
            RecommendationSummaryDoc,
            ReviewSummaryDoc,
            ServiceAddressesDoc,
            ProductAggregateDoc,
            ErrorInfoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "composite")
    )
)]
pub struct ApiDoc;
