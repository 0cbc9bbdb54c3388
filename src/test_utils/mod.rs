//! Test utilities and mock implementations.
//!
//! This module provides reusable mock implementations of the repository and
//! service traits for use in unit and integration tests.

pub mod mocks;

pub use mocks::{MockFailure, MockProductRepository, MockProductService};
