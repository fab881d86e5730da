use sea_orm_migration::{prelude::*, schema::*};

use super::m20250310_000000_create_users::UsersAuth;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    // Keyed by the refresh token's jti
                    .col(string(Sessions::Id).primary_key())
                    .col(string(Sessions::UserLogin))
                    .col(text(Sessions::AccessToken))
                    .col(text(Sessions::RefreshToken))
                    .col(boolean(Sessions::IsRevoked).default(false))
                    .col(
                        timestamp_with_time_zone(Sessions::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone(Sessions::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_user_login")
                            .from(Sessions::Table, Sessions::UserLogin)
                            .to(UsersAuth::Table, UsersAuth::Login)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Logout revokes by current access token
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_access_token")
                    .table(Sessions::Table)
                    .col(Sessions::AccessToken)
                    .to_owned(),
            )
            .await?;

        // Revoke-all works per login
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_user_login")
                    .table(Sessions::Table)
                    .col(Sessions::UserLogin)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
    UserLogin,
    AccessToken,
    RefreshToken,
    IsRevoked,
    CreatedAt,
    ExpiresAt,
}
