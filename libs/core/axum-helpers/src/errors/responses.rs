//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "error": {
            "type": "validation_error",
            "message": "Request validation failed",
            "details": {
                "login": [{"code": "length", "message": null, "params": {"max": 64}}]
            }
        }
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Missing, malformed or rejected credentials",
    content_type = "application/json",
    example = json!({
        "error": {"type": "unauthorized", "message": "Invalid token"}
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "error": {"type": "not_found", "message": "User not found"}
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict",
    content_type = "application/json",
    example = json!({
        "error": {"type": "duplicate", "message": "Login 'alice' is already taken"}
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": {"type": "internal_error", "message": "An internal error occurred"}
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
