//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: provider + tool registry wiring
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses
//! - `middleware.rs`: per-request tracing span + request id

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;

pub use services::{AppServices, build_services};

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}
