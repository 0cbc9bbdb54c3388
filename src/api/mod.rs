//! The API layer, containing web handlers and routing.

pub mod handlers;
pub mod router;

pub use router::{RouterOptions, create_router, create_router_with_options};
