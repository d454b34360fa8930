use sea_orm_migration::{prelude::*, schema::*};

use super::m20250914_000001_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSaveData::Table)
                    .if_not_exists()
                    .col(
                        var_binary(SystemSaveData::Uuid, 16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(json(SystemSaveData::Data))
                    .col(
                        timestamp(SystemSaveData::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_system_save_data_account_uuid")
                            .from(SystemSaveData::Table, SystemSaveData::Uuid)
                            .to(Account::Table, Account::Uuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSaveData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemSaveData {
    Table,
    Uuid,
    Data,
    UpdatedAt,
}
