//! Clients for the product, recommendation and review services.
//!
//! Each backend is reached through its own capability trait so the aggregator can
//! be composed from real HTTP clients or from in-process stand-ins.

pub mod http;
pub mod product;
pub mod recommendation;
pub mod review;

use async_trait::async_trait;
use models::{Product, Recommendation, Review};
use tracing::warn;

use crate::errors::ServiceError;

pub use http::{build_http_client, BackendClient};
pub use product::ProductClient;
pub use recommendation::RecommendationClient;
pub use review::ReviewClient;

/// Mandatory dependency: failures propagate to the caller unchanged.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn fetch(&self, product_id: i32) -> Result<Product, ServiceError>;
}

/// Optional dependency: never fails, an unavailable backend yields an empty list.
#[async_trait]
pub trait RecommendationFetcher: Send + Sync {
    async fn fetch_all(&self, product_id: i32) -> Vec<Recommendation>;
}

/// Optional dependency: never fails, an unavailable backend yields an empty list.
#[async_trait]
pub trait ReviewFetcher: Send + Sync {
    async fn fetch_all(&self, product_id: i32) -> Vec<Review>;
}

/// Tolerance policy for optional backends: every failure kind becomes an empty list.
///
/// The caller cannot tell "nothing exists" from "backend is down"; the failure is
/// only visible in logs and in the degraded-call metric.
pub fn degrade_to_empty<T>(backend: &str, product_id: i32, err: &ServiceError) -> Vec<T> {
    warn!(
        backend,
        product_id,
        kind = err.kind(),
        error = %err,
        "optional backend call failed, returning an empty list"
    );
    common::observability::record_degraded(backend);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_degrades_to_empty() {
        let errors = [
            ServiceError::NotFound("n".into()),
            ServiceError::InvalidInput("i".into()),
            ServiceError::unexpected(None, "timed out"),
            ServiceError::unexpected(Some(500), "boom"),
            ServiceError::not_implemented("x"),
        ];
        for e in &errors {
            let v: Vec<Review> = degrade_to_empty("review", 1, e);
            assert!(v.is_empty(), "{e:?}");
        }
    }
}
