pub mod aggregator;
pub mod service;

pub use aggregator::Aggregator;
pub use service::CompositeService;
