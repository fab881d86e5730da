use crate::errors::error_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures raised while authenticating or authorizing a request.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed authorization header")]
    MissingCredentials,

    /// Bad signature, wrong algorithm, expired or malformed token. The cause is not kept.
    #[error("invalid token")]
    InvalidToken,

    #[error("insufficient permissions")]
    Forbidden,

    #[error("token verification unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Missing or malformed authorization header",
            ),
            AuthError::InvalidToken => {
                error_response(StatusCode::UNAUTHORIZED, "unauthorized", "Invalid token")
            }
            AuthError::Forbidden => error_response(
                StatusCode::FORBIDDEN,
                "forbidden",
                "You are not allowed to access this resource",
            ),
            AuthError::Unavailable(msg) => {
                tracing::error!("Token verification unavailable: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Service temporarily unavailable",
                )
            }
        }
    }
}
