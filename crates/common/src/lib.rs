//! Shared building blocks for the composite service: logging setup, wire types,
//! service address discovery, Prometheus metrics and the admin HTTP server.

pub mod types;
pub mod utils;
pub mod observability;
pub mod admin_http;
