// src/logging_middleware.rs
//! Debug-level request and response body logging

use axum::body::to_bytes;
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, enabled, Level};

use crate::common::helpers::redact_sensitive;

/// Renders a body for the log. JSON bodies have passwords and tokens
/// replaced before they are printed.
fn render_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let body_str = std::str::from_utf8(bytes).ok()?;

    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(mut json) => {
            redact_sensitive(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string()))
        }
        Err(_) => Some(body_str.to_string()),
    }
}

/// Logs bodies when debug logging is on; otherwise passes straight through.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(request_body) = render_body(&bytes) {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %request_body,
            "📥 Request"
        );
    }

    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(response_body) = render_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %response_body,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
