use axum_helpers::{AccessClaims, TokenConfig, TokenMaker};
use chrono::Duration;
use std::sync::Arc;

use crate::error::{AuthResult, AuthServiceError};
use crate::models::{
    CreateSession, LoginRequest, LoginResponse, NewUser, RegisterRequest, RegisterResponse,
    RenewRequest, RenewResponse,
};
use crate::password::{hash_password, verify_password};
use crate::repository::{CredentialRepository, SessionRepository};

/// Session lifecycle: login, renew, logout, revoke-all, plus registration.
pub struct AuthService<S: SessionRepository, C: CredentialRepository> {
    sessions: Arc<S>,
    credentials: Arc<C>,
    tokens: Arc<TokenMaker>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<S: SessionRepository, C: CredentialRepository> Clone for AuthService<S, C> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            credentials: self.credentials.clone(),
            tokens: self.tokens.clone(),
            access_ttl: self.access_ttl,
            refresh_ttl: self.refresh_ttl,
        }
    }
}

impl<S: SessionRepository, C: CredentialRepository> AuthService<S, C> {
    pub fn new(sessions: S, credentials: C, tokens: Arc<TokenMaker>, config: &TokenConfig) -> Self {
        Self {
            sessions: Arc::new(sessions),
            credentials: Arc::new(credentials),
            tokens,
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
        }
    }

    /// Check credentials, mint an access/refresh pair and persist the session.
    pub async fn login(&self, input: LoginRequest) -> AuthResult<LoginResponse> {
        if input.login.is_empty() || input.password.is_empty() {
            return Err(AuthServiceError::Validation(
                "login and password are required".to_string(),
            ));
        }

        let user = self
            .credentials
            .get_user_auth(&input.login)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let password_hash = user.password_hash.clone();
        let matches =
            tokio::task::spawn_blocking(move || verify_password(&input.password, &password_hash))
                .await
                .map_err(|e| AuthServiceError::Internal(e.to_string()))??;

        if !matches {
            tracing::info!(login = %user.login, "Login rejected: wrong password");
            return Err(AuthServiceError::WrongPassword);
        }

        let (access_token, access_claims) =
            self.tokens
                .create_token(user.user_id, &user.login, user.is_admin, self.access_ttl)?;
        let (refresh_token, refresh_claims) =
            self.tokens
                .create_token(user.user_id, &user.login, user.is_admin, self.refresh_ttl)?;

        let session = self
            .sessions
            .create(CreateSession {
                id: refresh_claims.jti.clone(),
                user_login: user.login.clone(),
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                expires_at: refresh_claims.expires_at(),
            })
            .await?;

        tracing::info!(login = %user.login, session_id = %session.id, "User logged in");

        Ok(LoginResponse {
            session_id: session.id,
            access_token,
            refresh_token,
            access_token_expires_at: access_claims.expires_at(),
            refresh_token_expires_at: refresh_claims.expires_at(),
            login: user.login,
        })
    }

    /// Mint a new access token for a live session. The refresh token is never rotated.
    pub async fn renew(&self, input: RenewRequest) -> AuthResult<RenewResponse> {
        if input.refresh_token.is_empty() {
            return Err(AuthServiceError::Validation(
                "refresh_token is required".to_string(),
            ));
        }

        let claims = self.tokens.verify_token(&input.refresh_token)?;

        let session = self
            .sessions
            .get_by_id(&claims.jti)
            .await?
            // 401 rather than 404: /token/renew only answers 400, 401 or 500
            .ok_or_else(|| AuthServiceError::Unauthorized("session not found".to_string()))?;

        if session.is_revoked {
            tracing::info!(login = %claims.login, session_id = %session.id, "Renew rejected: session revoked");
            return Err(AuthServiceError::Unauthorized(
                "session is revoked".to_string(),
            ));
        }

        if session.user_login != claims.login {
            tracing::warn!(session_id = %session.id, "Renew rejected: login mismatch");
            return Err(AuthServiceError::Unauthorized(
                "session does not belong to this user".to_string(),
            ));
        }

        let (access_token, access_claims) =
            self.tokens
                .create_token(claims.id, &claims.login, claims.is_admin, self.access_ttl)?;

        self.sessions.renew(&session.id, &access_token).await?;

        tracing::debug!(login = %claims.login, session_id = %session.id, "Access token renewed");

        Ok(RenewResponse {
            access_token,
            access_token_expires_at: access_claims.expires_at(),
        })
    }

    /// Revoke the session the caller authenticated with.
    pub async fn logout(&self, claims: &AccessClaims) -> AuthResult<()> {
        self.sessions
            .revoke_by_access_token(&claims.access_token)
            .await?;

        tracing::info!(login = %claims.login(), "User logged out");
        Ok(())
    }

    /// Revoke every session of the caller's login.
    pub async fn revoke_all(&self, claims: &AccessClaims) -> AuthResult<()> {
        self.sessions.revoke_all_for_login(claims.login()).await
    }

    pub async fn register(&self, input: RegisterRequest) -> AuthResult<RegisterResponse> {
        if input.login.is_empty() || input.password.is_empty() {
            return Err(AuthServiceError::Validation(
                "login and password are required".to_string(),
            ));
        }

        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthServiceError::Internal(e.to_string()))??;

        let user = self
            .credentials
            .create_user(NewUser {
                login: input.login,
                password_hash,
                is_admin: false,
            })
            .await?;

        Ok(RegisterResponse {
            id: user.user_id,
            login: user.login,
        })
    }
}
