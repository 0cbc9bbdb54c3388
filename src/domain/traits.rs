//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{CreateProductRequest, Product};

/// Storage contract for products.
///
/// Implementations own both the ordered collection and the id sequence.
/// `add` must assign the id and append as a single atomic step so that ids
/// stay strictly increasing and gap-free under concurrent callers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products in insertion order
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;

    /// Assign the next id, append, and return the stored product
    async fn add(&self, request: CreateProductRequest) -> Result<Product, AppError>;
}
