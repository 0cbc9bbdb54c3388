//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, ConfigError, RepositoryError};
pub use traits::ProductRepository;
pub use types::{CreateProductRequest, ErrorDetail, ErrorResponse, Product, ProductId};
