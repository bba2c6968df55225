//! Product composite service layer.
//! - `integration`: HTTP clients for the product, recommendation and review services.
//! - `translator`: maps failed backend calls onto `ServiceError`.
//! - `composite`: concurrent fan-out, partial-failure policy and the exposed operations.

pub mod errors;
pub mod translator;
pub mod integration;
pub mod composite;

pub use composite::{Aggregator, CompositeService};
pub use errors::ServiceError;
