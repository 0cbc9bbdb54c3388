//! Concrete repository implementations.
//!
//! This module contains the storage adapters that implement the
//! `ProductRepository` trait defined in the domain layer.

pub mod memory;

pub use memory::{InMemoryProductRepository, SEED_PRODUCT_NAMES};
