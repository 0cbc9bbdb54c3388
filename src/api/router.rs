//! HTTP routing configuration with request tracing and optional API docs.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::app::AppState;

use super::handlers::{
    ApiDoc, PRODUCTS_PATH, create_product_handler, list_products_handler, metrics_handler,
    openapi_json_handler,
};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

/// Path of the interactive Scalar API reference.
pub const SCALAR_PATH: &str = "/scalar";

/// Router options resolved from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Serve the OpenAPI document and Scalar UI.
    pub api_docs: bool,
}

/// Create router without API documentation
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_router_with_options(app_state, RouterOptions::default())
}

/// Create router, exposing API documentation when `options.api_docs` is set
pub fn create_router_with_options(app_state: Arc<AppState>, options: RouterOptions) -> Router {
    let middleware = ServiceBuilder::new().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let mut router = Router::new().route(
        PRODUCTS_PATH,
        get(list_products_handler).post(create_product_handler),
    );

    if app_state.metrics_handle.is_some() {
        router = router.route("/metrics", get(metrics_handler));
    }

    let mut router = router.layer(middleware).with_state(app_state);

    if options.api_docs {
        router = router
            .route(OPENAPI_PATH, get(openapi_json_handler))
            .merge(Scalar::with_url(SCALAR_PATH, ApiDoc::openapi()));
    }

    router
}
