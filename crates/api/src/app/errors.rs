use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::tools::ToolResponse;

/// HTTP status for a tool response.
pub fn status_for(resp: &ToolResponse) -> StatusCode {
    match resp.error_kind() {
        None => StatusCode::OK,
        Some("invalid_parameter") | Some("unknown_tool") => StatusCode::BAD_REQUEST,
        Some("no_historical_data") => StatusCode::NOT_FOUND,
        Some("data_fetch_error") => StatusCode::BAD_GATEWAY,
        Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
