use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_login: String,
    #[sea_orm(column_type = "Text")]
    pub access_token: String,
    #[sea_orm(column_type = "Text")]
    pub refresh_token: String,
    pub is_revoked: bool,
    pub created_at: DateTimeWithTimeZone,
    pub expires_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Session {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_login: model.user_login,
            access_token: model.access_token,
            refresh_token: model.refresh_token,
            is_revoked: model.is_revoked,
            created_at: model.created_at.into(),
            expires_at: model.expires_at.into(),
        }
    }
}

impl From<crate::models::CreateSession> for ActiveModel {
    fn from(input: crate::models::CreateSession) -> Self {
        ActiveModel {
            id: Set(input.id),
            user_login: Set(input.user_login),
            access_token: Set(input.access_token),
            refresh_token: Set(input.refresh_token),
            is_revoked: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            expires_at: Set(input.expires_at.into()),
        }
    }
}
