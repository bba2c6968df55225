use async_trait::async_trait;
use models::Review;
use tracing::{debug, instrument};

use super::{degrade_to_empty, BackendClient, ReviewFetcher};
use crate::errors::ServiceError;

/// Client for the review service.
///
/// Reads go to `GET {base}?productId={id}`. The service also accepts
/// `POST {base}` with a Review body and `DELETE {base}?productId={id}`, but nothing
/// publishes those writes yet, so the client reports them as not implemented.
#[derive(Clone, Debug)]
pub struct ReviewClient {
    backend: BackendClient,
}

impl ReviewClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn reviews_url(&self, product_id: i32) -> String {
        format!("{}?productId={}", self.backend.base_url(), product_id)
    }

    pub async fn create(&self, _body: &Review) -> Result<Review, ServiceError> {
        Err(ServiceError::not_implemented("createReview"))
    }

    pub async fn delete_all(&self, _product_id: i32) -> Result<(), ServiceError> {
        Err(ServiceError::not_implemented("deleteReviews"))
    }
}

#[async_trait]
impl ReviewFetcher for ReviewClient {
    #[instrument(skip(self), fields(backend = "review"))]
    async fn fetch_all(&self, product_id: i32) -> Vec<Review> {
        let url = self.reviews_url(product_id);
        match self.backend.get_json::<Vec<Review>>(&url).await {
            Ok(reviews) => {
                debug!(count = reviews.len(), product_id, "found reviews");
                reviews
            }
            Err(e) => degrade_to_empty(self.backend.name(), product_id, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ReviewClient {
        ReviewClient::new(BackendClient::new("review", "http://localhost:7003/review", reqwest::Client::new()))
    }

    #[test]
    fn url_carries_product_id_query() {
        assert_eq!(client().reviews_url(1), "http://localhost:7003/review?productId=1");
    }

    #[tokio::test]
    async fn writes_are_not_implemented() {
        let c = client();
        let r = Review::new(1, 1, "a", "s", "c");
        assert!(matches!(c.create(&r).await, Err(ServiceError::NotImplemented(_))));
        assert!(matches!(c.delete_all(1).await, Err(ServiceError::NotImplemented(_))));
    }
}
