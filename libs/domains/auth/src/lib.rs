//! Auth Domain
//!
//! Login, access-token renewal, logout and revoke-all on top of revocable server-side
//! sessions, plus user registration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, bearer middleware on protected routes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ AuthService │  ← Session lifecycle, password checks, token minting
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Sessions + credentials (trait + in-memory/PostgreSQL)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_auth::{AuthService, InMemoryCredentialRepository, InMemorySessionRepository, handlers};
//!
//! let service = AuthService::new(
//!     InMemorySessionRepository::new(),
//!     InMemoryCredentialRepository::new(),
//!     token_maker,
//!     &token_config,
//! );
//! let router = handlers::router(service, verifier);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AuthResult, AuthServiceError};
pub use models::{
    CreateSession, LoginRequest, LoginResponse, NewUser, RegisterRequest, RegisterResponse,
    RenewRequest, RenewResponse, Session, UserAuth,
};
pub use postgres::{PgCredentialRepository, PgSessionRepository};
pub use repository::{
    CredentialRepository, InMemoryCredentialRepository, InMemorySessionRepository,
    SessionRepository,
};
pub use service::AuthService;
