use models::ProductAggregate;
use tracing::{info, instrument, warn};

use crate::composite::aggregator::Aggregator;
use crate::errors::ServiceError;

/// Operations behind the `/product-composite` endpoints.
pub struct CompositeService {
    aggregator: Aggregator,
}

impl CompositeService {
    pub fn new(aggregator: Aggregator) -> Self { Self { aggregator } }

    #[instrument(skip(self))]
    pub async fn get_aggregate(&self, product_id: i32) -> Result<ProductAggregate, ServiceError> {
        let aggregate = self.aggregator.get_aggregate(product_id).await?;
        info!(product_id, "product aggregate assembled");
        Ok(aggregate)
    }

    // Writes need an event publishing backend that does not exist yet.
    pub async fn create_aggregate(&self, body: &ProductAggregate) -> Result<(), ServiceError> {
        warn!(product_id = body.product_id, "createAggregate requested but not implemented");
        Err(ServiceError::not_implemented("createAggregate"))
    }

    pub async fn delete_aggregate(&self, product_id: i32) -> Result<(), ServiceError> {
        warn!(product_id, "deleteAggregate requested but not implemented");
        Err(ServiceError::not_implemented("deleteAggregate"))
    }
}
