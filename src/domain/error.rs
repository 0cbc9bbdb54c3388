//! Application error types with proper error chaining.

use thiserror::Error;

/// Failures raised by a [`ProductRepository`](super::traits::ProductRepository)
/// implementation. The in-memory repository never produces these; they exist
/// for backends that can.
#[derive(Error, Debug, Clone)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage operation failed: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Internal error: {0}")]
    Internal(String),
}
