//! Domain types for the product catalog.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier assigned to a product by the repository.
pub type ProductId = i32;

/// A catalog product.
///
/// Ids are handed out by the owning repository, never by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: ProductId,
    #[schema(example = "Product 1")]
    pub name: String,
}

impl Product {
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request payload for creating a new product.
///
/// An `id` present in the body is ignored. A missing `name` binds as the
/// empty string; names are not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(example = "Widget")]
    pub name: String,
}

impl CreateProductRequest {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// JSON error envelope returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub r#type: String,
    pub message: String,
}
