use axum::{
    Router,
    routing::{get, post},
};

pub mod system;
pub mod tools;

/// Router for the tool endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/tools", get(tools::list_tools))
        .route("/tools/call", post(tools::call_tool))
        .route("/tools/:name", post(tools::call_named_tool))
}
