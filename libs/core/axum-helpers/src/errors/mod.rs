//! Shared JSON error body.
//!
//! Every error response in the gallery services has the same shape:
//!
//! ```json
//! { "error": { "type": "unauthorized", "message": "Invalid token" } }
//! ```

pub mod handlers;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error kind, e.g. `validation_error`
    #[serde(rename = "type")]
    #[schema(example = "unauthorized")]
    pub kind: String,
    /// Human-readable message, safe to show to callers
    #[schema(example = "Invalid token")]
    pub message: String,
    /// Structured details (field validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                kind: kind.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.error.details = Some(details);
        self
    }
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(kind, message))).into_response()
}
