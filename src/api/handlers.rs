//! HTTP request handlers with OpenAPI documentation.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use utoipa::OpenApi;

use crate::app::AppState;
use crate::domain::{
    AppError, CreateProductRequest, ErrorDetail, ErrorResponse, Product, ProductId,
    RepositoryError,
};

/// Base path of the products resource.
pub const PRODUCTS_PATH: &str = "/api/products";

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "Layered product catalog backed by an in-memory repository",
        license(
            name = "MIT"
        )
    ),
    paths(
        list_products_handler,
        create_product_handler,
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Location of a created product, pointing at the list endpoint.
#[must_use]
pub fn product_location(id: ProductId) -> String {
    format!("{PRODUCTS_PATH}?id={id}")
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.service.get_all_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "Reference to the new product"))),
        (status = 400, description = "Malformed JSON body"),
        (status = 415, description = "Missing JSON content type"),
        (status = 422, description = "Body does not match the schema"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.service.add_product(payload).await?;
    let location = product_location(product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Serves the generated OpenAPI document.
pub async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Prometheus scrape endpoint.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::Repository(RepositoryError::Unavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable")
            }
            AppError::Repository(RepositoryError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
            }
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(error_type = %error_type, message = %message, "Server error");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                r#type: error_type.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use http_body_util::BodyExt;

    async fn error_body(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_product_location() {
        assert_eq!(product_location(4), "/api/products?id=4");
    }

    #[tokio::test]
    async fn test_unavailable_maps_to_503() {
        let (status, body) =
            error_body(RepositoryError::Unavailable("down".to_string()).into()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["type"], "storage_unavailable");
        assert_eq!(body["error"]["message"], "Storage unavailable: down");
    }

    #[tokio::test]
    async fn test_storage_error_maps_to_500() {
        let (status, body) = error_body(RepositoryError::Storage("io".to_string()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "storage_error");
    }

    #[tokio::test]
    async fn test_config_and_internal_map_to_500() {
        let config_err = ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: "bad".to_string(),
        };
        let (status, body) = error_body(config_err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "configuration_error");

        let (status, body) = error_body(AppError::Internal("oops".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "internal_error");
    }

    #[test]
    fn test_openapi_document_lists_products_path() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json["paths"]["/api/products"]["get"].is_object());
        assert!(json["paths"]["/api/products"]["post"].is_object());
        assert!(json["components"]["schemas"]["Product"].is_object());
    }
}
