//! Wire entities shared by the composite service and its backend clients.
//!
//! Every type serializes with camelCase field names, matching the JSON the
//! product, recommendation and review services exchange.

pub mod product;
pub mod recommendation;
pub mod review;
pub mod composite;
pub mod error_info;

pub use composite::{ProductAggregate, RecommendationSummary, ReviewSummary, ServiceAddresses};
pub use error_info::ErrorInfo;
pub use product::Product;
pub use recommendation::Recommendation;
pub use review::Review;
