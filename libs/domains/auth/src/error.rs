use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{TokenError, error_response};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Login '{0}' is already taken")]
    LoginTaken(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = Result<T, AuthServiceError>;

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AuthServiceError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AuthServiceError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "User not found".to_string(),
            ),
            AuthServiceError::WrongPassword => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Wrong password".to_string(),
            ),
            AuthServiceError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone())
            }
            AuthServiceError::LoginTaken(login) => (
                StatusCode::CONFLICT,
                "duplicate",
                format!("Login '{}' is already taken", login),
            ),
            AuthServiceError::Token(TokenError::Invalid) => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid token".to_string(),
            ),
            AuthServiceError::Token(e @ (TokenError::Signing(_) | TokenError::Lifetime)) => {
                tracing::error!("Token signing error: {}", e);
                internal()
            }
            AuthServiceError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                internal()
            }
            AuthServiceError::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal()
            }
            AuthServiceError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal()
            }
        };

        error_response(status, error_type, message)
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "An internal error occurred".to_string(),
    )
}
