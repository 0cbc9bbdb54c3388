//! Infrastructure layer implementations.

pub mod database;
pub mod observability;

pub use database::{InMemoryProductRepository, SEED_PRODUCT_NAMES};
pub use observability::{PrometheusHandle, init_metrics_handle, init_tracing};
