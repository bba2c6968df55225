use std::sync::Arc;
use std::time::Instant;

use common::observability::{AGGREGATE_DURATION, AGGREGATE_REQUESTS_TOTAL};
use configs::AppConfig;
use models::{Product, ProductAggregate, Recommendation, Review, ServiceAddresses};
use tracing::{debug, instrument, warn};

use crate::errors::ServiceError;
use crate::integration::{
    build_http_client, BackendClient, ProductClient, ProductFetcher, RecommendationClient,
    RecommendationFetcher, ReviewClient, ReviewFetcher,
};

/// Assembles a [`ProductAggregate`] from the three backends.
///
/// Product is mandatory, recommendations and reviews are optional. The three calls
/// run concurrently and all three outcomes are observed before deciding the result.
/// Dropping the returned future abandons every in-flight call.
pub struct Aggregator {
    products: Arc<dyn ProductFetcher>,
    recommendations: Arc<dyn RecommendationFetcher>,
    reviews: Arc<dyn ReviewFetcher>,
    service_address: String,
}

impl Aggregator {
    pub fn new(
        products: Arc<dyn ProductFetcher>,
        recommendations: Arc<dyn RecommendationFetcher>,
        reviews: Arc<dyn ReviewFetcher>,
        service_address: impl Into<String>,
    ) -> Self {
        Self { products, recommendations, reviews, service_address: service_address.into() }
    }

    /// HTTP clients for every configured backend sharing one connection pool.
    pub fn from_config(cfg: &AppConfig, service_address: impl Into<String>) -> anyhow::Result<Self> {
        let http = build_http_client(cfg.connect_timeout(), cfg.request_timeout())?;
        let backends = &cfg.backends;
        let products = ProductClient::new(BackendClient::new(
            "product",
            backends.product.url("product"),
            http.clone(),
        ));
        let recommendations = RecommendationClient::new(BackendClient::new(
            "recommendation",
            backends.recommendation.url("recommendation"),
            http.clone(),
        ));
        let reviews = ReviewClient::new(BackendClient::new(
            "review",
            backends.review.url("review"),
            http,
        ));
        Ok(Self::new(
            Arc::new(products),
            Arc::new(recommendations),
            Arc::new(reviews),
            service_address,
        ))
    }

    pub fn service_address(&self) -> &str {
        &self.service_address
    }

    #[instrument(skip(self))]
    pub async fn get_aggregate(&self, product_id: i32) -> Result<ProductAggregate, ServiceError> {
        let started = Instant::now();

        let (product, recommendations, reviews) = tokio::join!(
            self.products.fetch(product_id),
            self.recommendations.fetch_all(product_id),
            self.reviews.fetch_all(product_id),
        );

        let result = match product {
            Ok(product) => {
                debug!(
                    product_id,
                    recommendations = recommendations.len(),
                    reviews = reviews.len(),
                    "assembling product aggregate"
                );
                Ok(assemble(product, recommendations, reviews, &self.service_address))
            }
            Err(e) => {
                warn!(product_id, kind = e.kind(), error = %e, "product lookup failed, aborting aggregate");
                Err(e)
            }
        };

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        AGGREGATE_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
        AGGREGATE_DURATION.observe(started.elapsed().as_secs_f64());
        result
    }
}

/// Merge backend results; list order is kept as each backend returned it.
fn assemble(
    product: Product,
    recommendations: Vec<Recommendation>,
    reviews: Vec<Review>,
    composite_address: &str,
) -> ProductAggregate {
    let service_addresses = ServiceAddresses {
        composite: composite_address.to_string(),
        product: product.service_address.clone().unwrap_or_default(),
        recommendation: recommendations
            .first()
            .and_then(|r| r.service_address.clone())
            .unwrap_or_default(),
        review: reviews
            .first()
            .and_then(|r| r.service_address.clone())
            .unwrap_or_default(),
    };

    ProductAggregate {
        product_id: product.product_id,
        name: product.name,
        weight: product.weight,
        recommendations: recommendations.into_iter().map(Into::into).collect(),
        reviews: reviews.into_iter().map(Into::into).collect(),
        service_addresses,
    }
}
