//! Save-data factories for seeding system and session save records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates a system save record for the given account.
///
/// The save document is a small placeholder JSON object; tests that care about
/// the document contents should pass their own value via `create_system_save_with`.
///
/// # Arguments
/// - `db` - Database connection
/// - `uuid` - Account uuid the save belongs to
///
/// # Returns
/// - `Ok(entity::system_save_data::Model)` - Created save record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_system_save(
    db: &DatabaseConnection,
    uuid: &[u8],
) -> Result<entity::system_save_data::Model, DbErr> {
    create_system_save_with(db, uuid, json!({ "playTime": 0 })).await
}

/// Creates a system save record with a specific save document.
///
/// # Arguments
/// - `db` - Database connection
/// - `uuid` - Account uuid the save belongs to
/// - `data` - Save document to store
///
/// # Returns
/// - `Ok(entity::system_save_data::Model)` - Created save record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_system_save_with(
    db: &DatabaseConnection,
    uuid: &[u8],
    data: serde_json::Value,
) -> Result<entity::system_save_data::Model, DbErr> {
    entity::system_save_data::ActiveModel {
        uuid: ActiveValue::Set(uuid.to_vec()),
        data: ActiveValue::Set(data),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a session save record for the given account and slot.
///
/// # Arguments
/// - `db` - Database connection
/// - `uuid` - Account uuid the save belongs to
/// - `slot` - Session slot index
///
/// # Returns
/// - `Ok(entity::session_save_data::Model)` - Created save record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_session_save(
    db: &DatabaseConnection,
    uuid: &[u8],
    slot: i32,
) -> Result<entity::session_save_data::Model, DbErr> {
    create_session_save_with(db, uuid, slot, json!({ "floor": 1 })).await
}

/// Creates a session save record with a specific save document.
///
/// # Arguments
/// - `db` - Database connection
/// - `uuid` - Account uuid the save belongs to
/// - `slot` - Session slot index
/// - `data` - Save document to store
///
/// # Returns
/// - `Ok(entity::session_save_data::Model)` - Created save record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_session_save_with(
    db: &DatabaseConnection,
    uuid: &[u8],
    slot: i32,
    data: serde_json::Value,
) -> Result<entity::session_save_data::Model, DbErr> {
    entity::session_save_data::ActiveModel {
        uuid: ActiveValue::Set(uuid.to_vec()),
        slot: ActiveValue::Set(slot),
        data: ActiveValue::Set(data),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
