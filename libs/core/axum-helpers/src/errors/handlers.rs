use super::error_response;
use axum::{http::StatusCode, response::Response};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "not_found",
        "The requested resource was not found",
    )
}
