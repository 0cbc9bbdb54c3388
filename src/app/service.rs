//! Application service layer.
//!
//! This module contains the product use cases. They reach storage only
//! through the [`ProductRepository`] trait, so any backend can be injected.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::{AppError, CreateProductRequest, Product, ProductRepository};
use crate::infra::observability::PRODUCTS_CREATED_TOTAL;

/// Product use cases consumed by the presentation layer.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// All products in insertion order
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError>;

    /// Store a new product and return it with its assigned id.
    ///
    /// Names are accepted as given; blank and duplicate names are allowed.
    async fn add_product(&self, request: CreateProductRequest) -> Result<Product, AppError>;
}

/// Default [`ProductService`] delegating to a repository.
///
/// # Example
///
/// ```ignore
/// let repository = Arc::new(InMemoryProductRepository::new());
/// let service = AppService::new(repository);
///
/// let product = service.add_product(CreateProductRequest::new("Widget")).await?;
/// ```
pub struct AppService {
    repository: Arc<dyn ProductRepository>,
}

impl AppService {
    /// Creates a new `AppService` instance.
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage for products.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductService for AppService {
    #[instrument(skip(self))]
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        let products = self.repository.get_all().await?;
        debug!(count = products.len(), "Listing products");
        Ok(products)
    }

    #[instrument(skip(self, request), fields(product_name = %request.name))]
    async fn add_product(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        let product = self.repository.add(request).await?;
        metrics::counter!(PRODUCTS_CREATED_TOTAL).increment(1);
        info!(product_id = product.id, "Product created");
        Ok(product)
    }
}
