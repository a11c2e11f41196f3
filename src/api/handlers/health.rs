//! Handler for health check endpoint.

use axum::http::StatusCode;

/// Reports liveness.
///
/// # Endpoint
///
/// `ANY /health` (path configurable)
///
/// Always `204 No Content`; no body, no metrics, no redirect lookup.
pub async fn health_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
