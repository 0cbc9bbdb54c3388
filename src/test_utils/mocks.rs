//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of the repository and
//! service traits that can be configured to simulate success and failure.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::app::ProductService;
use crate::domain::{
    AppError, CreateProductRequest, Product, ProductId, ProductRepository, RepositoryError,
};

/// Failure mode for a mock.
#[derive(Debug, Clone, Default)]
pub enum MockFailure {
    /// Operations succeed.
    #[default]
    None,
    /// Operations fail with [`RepositoryError::Storage`].
    Storage(String),
    /// Operations fail with [`RepositoryError::Unavailable`].
    Unavailable(String),
}

impl MockFailure {
    fn check(&self) -> Result<(), AppError> {
        match self {
            Self::None => Ok(()),
            Self::Storage(msg) => Err(RepositoryError::Storage(msg.clone()).into()),
            Self::Unavailable(msg) => Err(RepositoryError::Unavailable(msg.clone()).into()),
        }
    }
}

/// Mock product repository for testing.
///
/// Starts empty, records every call, and can be configured to fail.
///
/// # Example
///
/// ```ignore
/// use product_catalog::test_utils::MockProductRepository;
///
/// // Create a mock that succeeds
/// let mock = MockProductRepository::new();
///
/// // Create a mock that fails
/// let failing_mock = MockProductRepository::failing("DB error");
/// ```
#[derive(Default)]
pub struct MockProductRepository {
    products: Mutex<Vec<Product>>,
    failure: MockFailure,
    call_count: AtomicU64,
}

impl MockProductRepository {
    /// Creates a new mock that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose operations fail with a storage error.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: MockFailure::Storage(message.into()),
            ..Self::default()
        }
    }

    /// Creates a mock whose operations fail as unavailable.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            failure: MockFailure::Unavailable(message.into()),
            ..Self::default()
        }
    }

    /// Gets the number of times any method was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Names passed to `add`, in call order.
    pub fn added_names(&self) -> Vec<String> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    fn increment_call_count(&self) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        self.increment_call_count();
        self.failure.check()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn add(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        self.increment_call_count();
        self.failure.check()?;
        let mut products = self.products.lock().unwrap();
        let id = products.len() as ProductId + 1;
        let product = Product::new(id, request.name);
        products.push(product.clone());
        Ok(product)
    }
}

/// Mock product service returning canned products.
///
/// Lets handler tests run without any repository.
#[derive(Default)]
pub struct MockProductService {
    products: Vec<Product>,
    failure: MockFailure,
    call_count: AtomicU64,
}

impl MockProductService {
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: MockFailure::Storage(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            failure: MockFailure::Unavailable(message.into()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProductService for MockProductService {
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.failure.check()?;
        Ok(self.products.clone())
    }

    async fn add_product(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.failure.check()?;
        // Fixed id makes the Location header predictable
        Ok(Product::new(42, request.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository_stores_and_counts() {
        let mock = MockProductRepository::new();

        let product = mock.add(CreateProductRequest::new("A")).await.unwrap();
        let all = mock.get_all().await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(all, vec![product]);
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock_repository_stores_nothing() {
        let mock = MockProductRepository::failing("boom");

        assert!(mock.add(CreateProductRequest::new("A")).await.is_err());
        assert!(mock.added_names().is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_service_returns_canned_products() {
        let mock = MockProductService::with_products(vec![Product::new(7, "Seven")]);

        let all = mock.get_all_products().await.unwrap();
        let created = mock.add_product(CreateProductRequest::new("New")).await.unwrap();

        assert_eq!(all, vec![Product::new(7, "Seven")]);
        assert_eq!(created, Product::new(42, "New"));
        assert_eq!(mock.call_count(), 2);
    }
}
