use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap each request in an `http_request` span and tag the response with its id.
///
/// Tool calls started by the handler open their `tool_call` span inside this one.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        %request_id,
    );
    let started = Instant::now();

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        )
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
