use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::tools::ToolCall;

pub async fn list_tools(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "tools": services.registry().descriptors(),
    }))
}

pub async fn call_tool(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ToolCall>, JsonRejection>,
) -> axum::response::Response {
    let Json(call) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", e.body_text()),
    };

    respond(&services, call).await
}

/// Convenience form: the tool name is in the path and the body is the argument object.
pub async fn call_named_tool(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Json(arguments) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", e.body_text()),
    };

    respond(&services, ToolCall { name, arguments }).await
}

async fn respond(services: &AppServices, call: ToolCall) -> axum::response::Response {
    let resp = services.registry().call(call).await;
    (errors::status_for(&resp), Json(resp)).into_response()
}
