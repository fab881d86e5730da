use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
    TransactionTrait,
};

use crate::{
    entity::{sessions, users, users_auth},
    error::{AuthResult, AuthServiceError},
    models::{CreateSession, NewUser, Session, UserAuth},
    repository::{CredentialRepository, SessionRepository},
};

/// PostgreSQL implementation of SessionRepository using SeaORM
#[derive(Clone)]
pub struct PgSessionRepository {
    db: DatabaseConnection,
}

impl PgSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, input: CreateSession) -> AuthResult<Session> {
        let active_model: sessions::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        Ok(model.into())
    }

    async fn get_by_id(&self, id: &str) -> AuthResult<Option<Session>> {
        let model = sessions::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn renew(&self, id: &str, access_token: &str) -> AuthResult<()> {
        sessions::Entity::update_many()
            .col_expr(sessions::Column::AccessToken, Expr::value(access_token))
            .filter(sessions::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn revoke_by_access_token(&self, access_token: &str) -> AuthResult<()> {
        let result = sessions::Entity::update_many()
            .col_expr(sessions::Column::IsRevoked, Expr::value(true))
            .filter(sessions::Column::AccessToken.eq(access_token))
            .exec(&self.db)
            .await?;

        tracing::debug!(rows = result.rows_affected, "Revoked session by access token");
        Ok(())
    }

    async fn revoke_all_for_login(&self, login: &str) -> AuthResult<()> {
        let result = sessions::Entity::update_many()
            .col_expr(sessions::Column::IsRevoked, Expr::value(true))
            .filter(sessions::Column::UserLogin.eq(login))
            .exec(&self.db)
            .await?;

        tracing::info!(login = %login, rows = result.rows_affected, "Revoked all sessions");
        Ok(())
    }
}

/// PostgreSQL implementation of CredentialRepository over `users` + `users_auth`
#[derive(Clone)]
pub struct PgCredentialRepository {
    db: DatabaseConnection,
}

impl PgCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn get_user_auth(&self, login: &str) -> AuthResult<Option<UserAuth>> {
        let model = users_auth::Entity::find()
            .filter(users_auth::Column::Login.eq(login))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create_user(&self, input: NewUser) -> AuthResult<UserAuth> {
        let login = input.login.clone();
        let txn = self.db.begin().await?;

        let user = users::ActiveModel {
            name: Set(input.login.clone()),
            description: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let auth = users_auth::ActiveModel {
            user_id: Set(user.id),
            login: Set(input.login),
            password_hash: Set(input.password_hash),
            is_admin: Set(input.is_admin),
        }
        .insert(&txn)
        .await
        .map_err(|e| unique_violation_to_taken(e, &login))?;

        txn.commit().await?;

        tracing::info!(user_id = auth.user_id, login = %auth.login, "Created user");
        Ok(auth.into())
    }
}

fn unique_violation_to_taken(err: DbErr, login: &str) -> AuthServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AuthServiceError::LoginTaken(login.to_string())
        }
        _ => AuthServiceError::Database(err),
    }
}
