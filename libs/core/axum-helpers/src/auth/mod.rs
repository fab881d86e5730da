//! Authentication and authorization module.
//!
//! This module provides:
//! - HS256 token minting and verification ([`TokenMaker`])
//! - A [`TokenVerifier`] seam with local and remote (`sso.v1.Auth`) backends
//! - Bearer token middleware that attaches [`AccessClaims`] to requests
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{LocalTokenVerifier, SharedVerifier, TokenConfig, TokenMaker, authenticate};
//! use core_config::FromEnv;
//! use std::sync::Arc;
//!
//! let maker = Arc::new(TokenMaker::new(&TokenConfig::from_env()?));
//! let verifier: SharedVerifier = Arc::new(LocalTokenVerifier::new(maker.clone()));
//!
//! let protected = Router::new()
//!     .route("/user/me", get(me))
//!     .route_layer(axum::middleware::from_fn_with_state(verifier, authenticate));
//! ```

pub mod claims;
pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod remote;
pub mod verifier;

pub use claims::{AccessClaims, Identity, UserClaims};
pub use config::TokenConfig;
pub use error::AuthError;
pub use jwt::{ACCESS_TOKEN_TTL, REFRESH_TOKEN_TTL, TokenError, TokenMaker};
pub use middleware::{Authenticated, authenticate, bearer_token};
pub use remote::RemoteTokenVerifier;
#[cfg(test)]
pub use verifier::MockTokenVerifier;
pub use verifier::{LocalTokenVerifier, SharedVerifier, TokenVerifier};
