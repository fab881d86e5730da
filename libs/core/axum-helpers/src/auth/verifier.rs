use super::claims::Identity;
use super::error::AuthError;
use super::jwt::TokenMaker;
use async_trait::async_trait;
use std::sync::Arc;

/// Turns a raw access token into a verified identity.
///
/// One implementation is chosen at startup and shared by every protected route.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, access_token: &str) -> Result<Identity, AuthError>;
}

/// Shared handle used as middleware state.
pub type SharedVerifier = Arc<dyn TokenVerifier>;

/// Verifies tokens in-process with the local [`TokenMaker`].
#[derive(Clone)]
pub struct LocalTokenVerifier {
    maker: Arc<TokenMaker>,
}

impl LocalTokenVerifier {
    pub fn new(maker: Arc<TokenMaker>) -> Self {
        Self { maker }
    }
}

#[async_trait]
impl TokenVerifier for LocalTokenVerifier {
    async fn verify(&self, access_token: &str) -> Result<Identity, AuthError> {
        self.maker
            .verify_token(access_token)
            .map(|claims| claims.identity())
            .map_err(|_| AuthError::InvalidToken)
    }
}
