use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{AuthResult, AuthServiceError};
use crate::models::{CreateSession, NewUser, Session, UserAuth};

/// Repository trait for session persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a session keyed by the refresh token's `jti`
    async fn create(&self, input: CreateSession) -> AuthResult<Session>;

    /// Get a session by ID
    async fn get_by_id(&self, id: &str) -> AuthResult<Option<Session>>;

    /// Overwrite the stored access token of a session
    async fn renew(&self, id: &str, access_token: &str) -> AuthResult<()>;

    /// Revoke the session whose current access token equals `access_token`
    async fn revoke_by_access_token(&self, access_token: &str) -> AuthResult<()>;

    /// Revoke every session owned by `login`
    async fn revoke_all_for_login(&self, login: &str) -> AuthResult<()>;
}

/// Credential lookup and registration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn get_user_auth(&self, login: &str) -> AuthResult<Option<UserAuth>>;

    /// Create a user and its credentials; `LoginTaken` when the login exists
    async fn create_user(&self, input: NewUser) -> AuthResult<UserAuth>;
}

/// In-memory implementation of SessionRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, input: CreateSession) -> AuthResult<Session> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&input.id) {
            return Err(AuthServiceError::Internal(format!(
                "session {} already exists",
                input.id
            )));
        }

        let session = Session::new(input);
        sessions.insert(session.id.clone(), session.clone());

        Ok(session)
    }

    async fn get_by_id(&self, id: &str) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn renew(&self, id: &str, access_token: &str) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;

        if let Some(session) = sessions.get_mut(id) {
            session.access_token = access_token.to_string();
        }

        Ok(())
    }

    async fn revoke_by_access_token(&self, access_token: &str) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;

        sessions
            .values_mut()
            .filter(|s| s.access_token == access_token)
            .for_each(|s| s.is_revoked = true);

        Ok(())
    }

    async fn revoke_all_for_login(&self, login: &str) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;

        sessions
            .values_mut()
            .filter(|s| s.user_login == login)
            .for_each(|s| s.is_revoked = true);

        Ok(())
    }
}

/// In-memory implementation of CredentialRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryCredentialRepository {
    users: Arc<RwLock<HashMap<String, UserAuth>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for InMemoryCredentialRepository {
    fn default() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn get_user_auth(&self, login: &str) -> AuthResult<Option<UserAuth>> {
        let users = self.users.read().await;
        Ok(users.get(login).cloned())
    }

    async fn create_user(&self, input: NewUser) -> AuthResult<UserAuth> {
        let mut users = self.users.write().await;

        if users.contains_key(&input.login) {
            return Err(AuthServiceError::LoginTaken(input.login));
        }

        let user = UserAuth {
            user_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            login: input.login,
            password_hash: input.password_hash,
            is_admin: input.is_admin,
        };
        users.insert(user.login.clone(), user.clone());

        tracing::info!(user_id = user.user_id, login = %user.login, "Created user");
        Ok(user)
    }
}
