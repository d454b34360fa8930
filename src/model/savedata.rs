//! Save-data types shared by the savedata endpoints and services.

use serde::Deserialize;

use crate::error::savedata::SaveDataError;

/// Number of session save slots available to every account.
pub const SESSION_SLOT_COUNT: i32 = 5;

/// Save-data categories addressable through the savedata endpoints.
///
/// The wire representation is an integer discriminator: `0` for system,
/// `1` for session. Anything else is rejected before any persistence call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDataType {
    /// The single account-wide save record.
    System,
    /// A save record scoped to one of the session slots.
    Session,
}

impl TryFrom<i32> for SaveDataType {
    type Error = SaveDataError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::System),
            1 => Ok(Self::Session),
            other => Err(SaveDataError::InvalidDataType(other)),
        }
    }
}

/// Query parameters shared by the savedata endpoints.
///
/// `slot` defaults to 0 when absent; it is only meaningful for session
/// save data.
#[derive(Debug, Deserialize)]
pub struct SaveDataQuery {
    pub datatype: i32,
    #[serde(default)]
    pub slot: i32,
}
