use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use tracing::Span;
use uuid::Uuid;

/// Creates a span per request, tagged with a fresh request id so the log
/// lines of one request can be pulled out of an interleaved stream.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::info!("started processing request");
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = %response.status(),
        latency_ms = %latency.as_millis(),
        "finished processing request"
    );
}
