//! Product Catalog
//!
//! A layered HTTP service exposing list and create operations for products,
//! built around trait-based abstraction and dependency injection.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │     HTTP handlers, routing, OpenAPI docs     │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │      ProductService use cases, AppState      │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   Product, ProductRepository trait, errors   │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │  In-memory repository, tracing, metrics      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Each request flows handler → service → repository and back. Handlers
//! only see `Arc<dyn ProductService>`; the service only sees
//! `Arc<dyn ProductRepository>`. Concrete types are chosen in `main`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use product_catalog::api::create_router;
//! use product_catalog::app::AppState;
//! use product_catalog::infra::InMemoryProductRepository;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repository = Arc::new(InMemoryProductRepository::new());
//!     let state = Arc::new(AppState::new(repository));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, create_router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
