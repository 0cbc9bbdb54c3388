//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::ProductRepository;
use crate::infra::PrometheusHandle;

use super::service::{AppService, ProductService};

/// Shared application state for the Axum web server.
///
/// Handlers see only the [`ProductService`] contract, never the repository
/// behind it.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// let repository = Arc::new(InMemoryProductRepository::new());
/// let state = AppState::new(repository);
///
/// // Use with Axum
/// let router = Router::new()
///     .route("/api/products", get(list_products_handler))
///     .with_state(Arc::new(state));
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Product use cases.
    pub service: Arc<dyn ProductService>,

    /// Renders Prometheus output when a metrics recorder is installed.
    pub metrics_handle: Option<Arc<PrometheusHandle>>,
}

impl AppState {
    /// Creates a new `AppState`, wiring an [`AppService`] to the repository.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self::with_service(Arc::new(AppService::new(repository)))
    }

    /// Creates a new `AppState` with a custom service.
    ///
    /// This is useful for testing when you want to inject a pre-configured service.
    #[must_use]
    pub fn with_service(service: Arc<dyn ProductService>) -> Self {
        Self {
            service,
            metrics_handle: None,
        }
    }

    /// Attaches a Prometheus handle, enabling `GET /metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: Option<Arc<PrometheusHandle>>) -> Self {
        self.metrics_handle = handle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryProductRepository;
    use crate::test_utils::MockProductService;

    #[tokio::test]
    async fn test_app_state_wires_service_to_repository() {
        let repository = Arc::new(InMemoryProductRepository::new());

        let state = AppState::new(repository);

        let products = state.service.get_all_products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert!(state.metrics_handle.is_none());
    }

    #[test]
    fn test_app_state_is_clone() {
        let state = AppState::with_service(Arc::new(MockProductService::default()));
        let cloned = state.clone();

        // Both should point to the same service
        assert!(Arc::ptr_eq(&state.service, &cloned.service));
    }
}
