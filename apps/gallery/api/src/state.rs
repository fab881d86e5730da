//! Shared application state.

use crate::config::{AuthBackend, Config};
use axum_helpers::{LocalTokenVerifier, RemoteTokenVerifier, SharedVerifier, TokenMaker};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Everything the routers need, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
    /// Signs and verifies tokens with the configured secret
    pub tokens: Arc<TokenMaker>,
    /// Backs the bearer middleware on protected routes
    pub verifier: SharedVerifier,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> eyre::Result<Self> {
        let tokens = Arc::new(TokenMaker::new(&config.token));

        let verifier: SharedVerifier = match &config.auth_backend {
            AuthBackend::Local => Arc::new(LocalTokenVerifier::new(tokens.clone())),
            AuthBackend::Remote { address } => {
                tracing::info!(address = %address, "Verifying access tokens remotely");
                Arc::new(RemoteTokenVerifier::connect_lazy(address.clone())?)
            }
        };

        Ok(Self {
            config,
            db,
            tokens,
            verifier,
        })
    }
}
