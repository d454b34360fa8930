//! Save-data repository for database operations.
//!
//! Stores and retrieves the opaque save documents for both save-data
//! categories: the single system record per account and the per-slot session
//! records. The documents themselves are never interpreted here.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};

/// Repository providing database operations for save-data records.
pub struct SaveDataRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaveDataRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the account-wide system save document.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - The stored save document
    /// - `Ok(None)` - The account has no system save
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_system(&self, uuid: &[u8]) -> Result<Option<serde_json::Value>, DbErr> {
        let entity = entity::prelude::SystemSaveData::find_by_id(uuid.to_vec())
            .one(self.db)
            .await?;

        Ok(entity.map(|model| model.data))
    }

    /// Fetches the session save document for one slot.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - The stored save document
    /// - `Ok(None)` - The slot is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_session(
        &self,
        uuid: &[u8],
        slot: i32,
    ) -> Result<Option<serde_json::Value>, DbErr> {
        let entity = entity::prelude::SessionSaveData::find_by_id((uuid.to_vec(), slot))
            .one(self.db)
            .await?;

        Ok(entity.map(|model| model.data))
    }

    /// Inserts or replaces the account-wide system save document.
    ///
    /// # Arguments
    /// - `uuid` - Account the save belongs to
    /// - `data` - Opaque save document
    ///
    /// # Returns
    /// - `Ok(())` - Document stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_system(&self, uuid: &[u8], data: serde_json::Value) -> Result<(), DbErr> {
        entity::prelude::SystemSaveData::insert(entity::system_save_data::ActiveModel {
            uuid: ActiveValue::Set(uuid.to_vec()),
            data: ActiveValue::Set(data),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::system_save_data::Column::Uuid)
                .update_columns([
                    entity::system_save_data::Column::Data,
                    entity::system_save_data::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Inserts or replaces the session save document for one slot.
    ///
    /// # Arguments
    /// - `uuid` - Account the save belongs to
    /// - `slot` - Session slot index
    /// - `data` - Opaque save document
    ///
    /// # Returns
    /// - `Ok(())` - Document stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_session(
        &self,
        uuid: &[u8],
        slot: i32,
        data: serde_json::Value,
    ) -> Result<(), DbErr> {
        entity::prelude::SessionSaveData::insert(entity::session_save_data::ActiveModel {
            uuid: ActiveValue::Set(uuid.to_vec()),
            slot: ActiveValue::Set(slot),
            data: ActiveValue::Set(data),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::session_save_data::Column::Uuid,
                entity::session_save_data::Column::Slot,
            ])
            .update_columns([
                entity::session_save_data::Column::Data,
                entity::session_save_data::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the account-wide system save record.
    ///
    /// Deleting an absent record is not an error; the delete simply affects
    /// no rows.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted (or none existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_system(&self, uuid: &[u8]) -> Result<(), DbErr> {
        entity::prelude::SystemSaveData::delete_many()
            .filter(entity::system_save_data::Column::Uuid.eq(uuid.to_vec()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes the session save record for one slot.
    ///
    /// Deleting an absent record is not an error; the delete simply affects
    /// no rows.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted (or none existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_session(&self, uuid: &[u8], slot: i32) -> Result<(), DbErr> {
        entity::prelude::SessionSaveData::delete_many()
            .filter(entity::session_save_data::Column::Uuid.eq(uuid.to_vec()))
            .filter(entity::session_save_data::Column::Slot.eq(slot))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
