//! Account domain models and parameters.
//!
//! Provides the domain model for player accounts along with parameter types
//! for registration and the DTOs exposed through the account endpoints. The
//! domain model deliberately omits credential material; credential checks
//! happen in the service layer against the entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player account with identity and activity metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Opaque 16-byte account identifier.
    pub uuid: Vec<u8>,
    /// Login name of the account.
    pub username: String,
    /// When the account was created.
    pub registered_at: DateTime<Utc>,
    /// Last successful login, if any.
    pub last_logged_in: Option<DateTime<Utc>>,
    /// Last recorded save-data activity, if any.
    pub last_activity: Option<DateTime<Utc>>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository
    /// boundary, dropping the stored credential material.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            uuid: entity.uuid,
            username: entity.username,
            registered_at: entity.registered_at,
            last_logged_in: entity.last_logged_in,
            last_activity: entity.last_activity,
        }
    }

    /// Converts the account domain model to a DTO for API responses.
    pub fn into_dto(self) -> AccountInfoDto {
        AccountInfoDto {
            username: self.username,
            registered_at: self.registered_at,
            last_logged_in: self.last_logged_in,
        }
    }
}

/// Parameters for creating a new account row.
///
/// Produced by the account service after credential hashing; the repository
/// stores these fields verbatim.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    /// Opaque 16-byte account identifier.
    pub uuid: Vec<u8>,
    /// Login name, unique across accounts.
    pub username: String,
    /// Salted password hash.
    pub hash: Vec<u8>,
    /// Per-account salt used for the hash.
    pub salt: Vec<u8>,
}

/// Credentials submitted to the register and login endpoints.
#[derive(Debug, Deserialize)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}

/// Session token issued by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionDto {
    pub token: String,
}

/// Account information returned by the info endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountInfoDto {
    pub username: String,
    pub registered_at: DateTime<Utc>,
    pub last_logged_in: Option<DateTime<Utc>>,
}
