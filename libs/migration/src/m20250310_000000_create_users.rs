use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(text_null(Users::Description))
                    .to_owned(),
            )
            .await?;

        // Credentials live apart from the profile; one row per user.
        manager
            .create_table(
                Table::create()
                    .table(UsersAuth::Table)
                    .if_not_exists()
                    .col(integer(UsersAuth::UserId).primary_key())
                    .col(string_uniq(UsersAuth::Login))
                    .col(text(UsersAuth::PasswordHash))
                    .col(boolean(UsersAuth::IsAdmin).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_auth_user_id")
                            .from(UsersAuth::Table, UsersAuth::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersAuth::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub enum UsersAuth {
    Table,
    UserId,
    Login,
    PasswordHash,
    IsAdmin,
}
