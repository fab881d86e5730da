//! # Axum Helpers
//!
//! Shared building blocks for the gallery HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: token minting/verification, verifier backends, bearer middleware
//! - **[`server`]**: router setup, health checks, graceful shutdown
//! - **[`http`]**: security headers
//! - **[`errors`]**: the shared JSON error body
//! - **[`extractors`]**: validated JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    ACCESS_TOKEN_TTL, AccessClaims, AuthError, Authenticated, Identity, LocalTokenVerifier,
    REFRESH_TOKEN_TTL, RemoteTokenVerifier, SharedVerifier, TokenConfig, TokenError,
    TokenMaker, TokenVerifier, UserClaims, authenticate,
};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use errors::{ErrorResponse, error_response};

pub use extractors::ValidatedJson;
