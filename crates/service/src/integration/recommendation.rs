use async_trait::async_trait;
use models::Recommendation;
use tracing::{debug, instrument};

use super::{degrade_to_empty, BackendClient, RecommendationFetcher};
use crate::errors::ServiceError;

/// Client for `GET {base}?productId={id}` on the recommendation service.
#[derive(Clone, Debug)]
pub struct RecommendationClient {
    backend: BackendClient,
}

impl RecommendationClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn recommendations_url(&self, product_id: i32) -> String {
        format!("{}?productId={}", self.backend.base_url(), product_id)
    }

    pub async fn create(&self, _body: &Recommendation) -> Result<Recommendation, ServiceError> {
        Err(ServiceError::not_implemented("createRecommendation"))
    }

    pub async fn delete_all(&self, _product_id: i32) -> Result<(), ServiceError> {
        Err(ServiceError::not_implemented("deleteRecommendations"))
    }
}

#[async_trait]
impl RecommendationFetcher for RecommendationClient {
    #[instrument(skip(self), fields(backend = "recommendation"))]
    async fn fetch_all(&self, product_id: i32) -> Vec<Recommendation> {
        let url = self.recommendations_url(product_id);
        match self.backend.get_json::<Vec<Recommendation>>(&url).await {
            Ok(recommendations) => {
                debug!(count = recommendations.len(), product_id, "found recommendations");
                recommendations
            }
            Err(e) => degrade_to_empty(self.backend.name(), product_id, &e),
        }
    }
}
