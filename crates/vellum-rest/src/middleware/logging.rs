//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs one line per completed request. Server errors log at `warn`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            target: "vellum::http",
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = %elapsed_ms,
            "Request failed"
        );
    } else {
        info!(
            target: "vellum::http",
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = %elapsed_ms,
            "Request completed"
        );
    }

    response
}
