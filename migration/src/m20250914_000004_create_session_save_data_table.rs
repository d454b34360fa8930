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
                    .table(SessionSaveData::Table)
                    .if_not_exists()
                    .col(var_binary(SessionSaveData::Uuid, 16))
                    .col(integer(SessionSaveData::Slot))
                    .col(json(SessionSaveData::Data))
                    .col(
                        timestamp(SessionSaveData::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SessionSaveData::Uuid)
                            .col(SessionSaveData::Slot),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_save_data_account_uuid")
                            .from(SessionSaveData::Table, SessionSaveData::Uuid)
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
            .drop_table(Table::drop().table(SessionSaveData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionSaveData {
    Table,
    Uuid,
    Slot,
    UpdatedAt,
    Data,
}
