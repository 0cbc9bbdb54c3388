//! In-memory product repository.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

use crate::domain::{
    AppError, CreateProductRequest, Product, ProductId, ProductRepository, RepositoryError,
};

/// Names of the products present in a freshly seeded repository.
pub const SEED_PRODUCT_NAMES: [&str; 3] = ["Product 1", "Product 2", "Product 3"];

/// Ordered product list plus the id sequence that feeds it.
#[derive(Debug)]
struct Store {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Store {
    fn empty() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    fn seeded() -> Self {
        let products: Vec<Product> = (1..)
            .zip(SEED_PRODUCT_NAMES)
            .map(|(id, name)| Product::new(id, name))
            .collect();
        Self {
            next_id: products.len() as ProductId + 1,
            products,
        }
    }

    /// Hands out `next_id` and appends. The sequence ends at
    /// `ProductId::MAX - 1`; past that every insert fails and stores nothing.
    fn insert(&mut self, name: String) -> Result<Product, RepositoryError> {
        let following = self.next_id.checked_add(1).ok_or_else(|| {
            RepositoryError::Storage(format!("product id sequence exhausted at {}", self.next_id))
        })?;
        let product = Product::new(self.next_id, name);
        self.next_id = following;
        self.products.push(product.clone());
        Ok(product)
    }
}

/// Process-lifetime product storage guarded by a single lock.
///
/// The lock covers both the list and the id counter, so id assignment and
/// append happen together. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: Mutex<Store>,
}

impl InMemoryProductRepository {
    /// Creates a repository seeded with "Product 1".."Product 3" (ids 1..3).
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::seeded()),
        }
    }

    /// Creates a repository with no products; the first id handed out is 1.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            store: Mutex::new(Store::empty()),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every critical section leaves the store consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let products = self.lock().products.clone();
        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    #[instrument(skip(self, request), fields(product_name = %request.name))]
    async fn add(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        let product = self.lock().insert(request.name)?;
        debug!(product_id = product.id, "Stored product");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_new_repository_is_seeded() {
        let repo = InMemoryProductRepository::new();

        let products = repo.get_all().await.unwrap();

        assert_eq!(
            products,
            vec![
                Product::new(1, "Product 1"),
                Product::new(2, "Product 2"),
                Product::new(3, "Product 3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_repository_starts_at_one() {
        let repo = InMemoryProductRepository::empty();
        assert!(repo.is_empty());

        let product = repo.add(CreateProductRequest::new("First")).await.unwrap();

        assert_eq!(product, Product::new(1, "First"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_add_appends_with_next_id() {
        let repo = InMemoryProductRepository::new();

        let widget = repo.add(CreateProductRequest::new("Widget")).await.unwrap();
        let gadget = repo.add(CreateProductRequest::new("Gadget")).await.unwrap();

        assert_eq!(widget.id, 4);
        assert_eq!(gadget.id, 5);

        let products = repo.get_all().await.unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Product 1", "Product 2", "Product 3", "Widget", "Gadget"]
        );
    }

    #[tokio::test]
    async fn test_add_accepts_blank_and_duplicate_names() {
        let repo = InMemoryProductRepository::new();

        let blank = repo.add(CreateProductRequest::new("")).await.unwrap();
        let dup = repo.add(CreateProductRequest::new("Product 1")).await.unwrap();

        assert_eq!(blank.id, 4);
        assert_eq!(dup.id, 5);
        assert_eq!(repo.len(), 5);
    }

    #[tokio::test]
    async fn test_get_all_returns_snapshot() {
        let repo = InMemoryProductRepository::new();

        let before = repo.get_all().await.unwrap();
        repo.add(CreateProductRequest::new("Later")).await.unwrap();

        assert_eq!(before.len(), 3);
        assert_eq!(repo.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_add_fails_cleanly_when_ids_exhausted() {
        let repo = InMemoryProductRepository {
            store: Mutex::new(Store {
                products: Vec::new(),
                next_id: ProductId::MAX - 1,
            }),
        };

        let last = repo.add(CreateProductRequest::new("Last")).await.unwrap();
        assert_eq!(last.id, ProductId::MAX - 1);

        let err = repo
            .add(CreateProductRequest::new("Overflow"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Repository(RepositoryError::Storage(ref msg)) if msg.contains("exhausted")
        ));

        // The failed insert left the store untouched
        assert_eq!(repo.get_all().await.unwrap(), vec![last]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_yield_unique_gapless_ids() {
        let repo = Arc::new(InMemoryProductRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.add(CreateProductRequest::new(format!("Concurrent {i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids, (4..68).collect::<HashSet<_>>());

        // Stored order matches id order
        let products = repo.get_all().await.unwrap();
        let stored: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(stored, (1..68).collect::<Vec<_>>());
    }
}
