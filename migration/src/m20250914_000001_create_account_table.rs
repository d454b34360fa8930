use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(
                        var_binary(Account::Uuid, 16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_uniq(Account::Username))
                    .col(var_binary(Account::Hash, 32))
                    .col(var_binary(Account::Salt, 16))
                    .col(
                        timestamp(Account::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Account::LastLoggedIn))
                    .col(timestamp_null(Account::LastActivity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Uuid,
    Username,
    Hash,
    Salt,
    RegisteredAt,
    LastLoggedIn,
    LastActivity,
}
