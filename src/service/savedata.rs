//! Save-data service for business logic.
//!
//! Routes save-data requests by data type and slot onto the repository
//! operations for the two save categories. All slot and data-type validation
//! happens here, before any persistence call.

use sea_orm::DatabaseConnection;

use crate::{
    data::{account::AccountRepository, savedata::SaveDataRepository},
    error::{savedata::SaveDataError, AppError},
    model::savedata::{SaveDataType, SESSION_SLOT_COUNT},
};

/// Service providing business logic for save-data management.
pub struct SaveDataService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SaveDataService<'a> {
    /// Creates a new SaveDataService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SaveDataService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one save document for the account.
    ///
    /// Routes by data type: system saves ignore the slot entirely, session
    /// saves validate it first.
    ///
    /// # Arguments
    /// - `uuid` - Opaque account identifier, forwarded as-is
    /// - `datatype` - Save-data discriminator (0 = system, 1 = session)
    /// - `slot` - Session slot index, only meaningful for session saves
    ///
    /// # Returns
    /// - `Ok(Value)` - The stored save document
    /// - `Err(AppError::SaveDataErr)` - Invalid data type or slot out of range
    /// - `Err(AppError::NotFound)` - No save stored for the account/slot
    /// - `Err(AppError::DbErr)` - Database error, propagated verbatim
    pub async fn get(
        &self,
        uuid: &[u8],
        datatype: i32,
        slot: i32,
    ) -> Result<serde_json::Value, AppError> {
        let save_repo = SaveDataRepository::new(self.db);

        let data = match SaveDataType::try_from(datatype)? {
            SaveDataType::System => save_repo.get_system(uuid).await?,
            SaveDataType::Session => {
                Self::check_slot(slot)?;
                save_repo.get_session(uuid, slot).await?
            }
        };

        data.ok_or_else(|| AppError::NotFound("save data not found".to_string()))
    }

    /// Stores one save document for the account.
    ///
    /// Same routing and validation as `get`. The account's last-activity
    /// timestamp is updated on a best-effort basis first.
    ///
    /// # Arguments
    /// - `uuid` - Opaque account identifier, forwarded as-is
    /// - `datatype` - Save-data discriminator (0 = system, 1 = session)
    /// - `slot` - Session slot index, only meaningful for session saves
    /// - `data` - Opaque save document
    ///
    /// # Returns
    /// - `Ok(())` - Document stored
    /// - `Err(AppError::SaveDataErr)` - Invalid data type or slot out of range
    /// - `Err(AppError::DbErr)` - Database error, propagated verbatim
    pub async fn update(
        &self,
        uuid: &[u8],
        datatype: i32,
        slot: i32,
        data: serde_json::Value,
    ) -> Result<(), AppError> {
        self.touch_last_activity(uuid).await;

        let save_repo = SaveDataRepository::new(self.db);
        match SaveDataType::try_from(datatype)? {
            SaveDataType::System => save_repo.upsert_system(uuid, data).await?,
            SaveDataType::Session => {
                Self::check_slot(slot)?;
                save_repo.upsert_session(uuid, slot, data).await?;
            }
        }

        Ok(())
    }

    /// Deletes one save-data record for the account.
    ///
    /// The account's last-activity timestamp is updated on a best-effort
    /// basis first; a failure there never aborts the deletion. Routing then
    /// makes exactly one repository call: system deletions ignore the slot,
    /// session deletions validate it and target the single (uuid, slot)
    /// record. Repository errors are propagated verbatim, without retry.
    ///
    /// # Arguments
    /// - `uuid` - Opaque account identifier, forwarded as-is
    /// - `datatype` - Save-data discriminator (0 = system, 1 = session)
    /// - `slot` - Session slot index, only meaningful for session saves
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted (or none existed)
    /// - `Err(AppError::SaveDataErr)` - Invalid data type or slot out of range;
    ///   no persistence call was made
    /// - `Err(AppError::DbErr)` - Database error, propagated verbatim
    pub async fn delete(&self, uuid: &[u8], datatype: i32, slot: i32) -> Result<(), AppError> {
        self.touch_last_activity(uuid).await;

        let save_repo = SaveDataRepository::new(self.db);
        match SaveDataType::try_from(datatype)? {
            SaveDataType::System => save_repo.delete_system(uuid).await?,
            SaveDataType::Session => {
                Self::check_slot(slot)?;
                save_repo.delete_session(uuid, slot).await?;
            }
        }

        Ok(())
    }

    /// Records account activity without affecting the enclosing operation.
    ///
    /// Activity bookkeeping is advisory: a failure is logged and swallowed so
    /// the primary operation always proceeds.
    async fn touch_last_activity(&self, uuid: &[u8]) {
        let account_repo = AccountRepository::new(self.db);
        if let Err(err) = account_repo.update_last_activity(uuid).await {
            tracing::warn!("failed to update account last activity: {err}");
        }
    }

    fn check_slot(slot: i32) -> Result<(), SaveDataError> {
        if !(0..SESSION_SLOT_COUNT).contains(&slot) {
            return Err(SaveDataError::SlotOutOfRange(slot));
        }
        Ok(())
    }
}
