//! Account factory for creating test account entities.
//!
//! This module provides factory methods for creating account entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, uuid_from_id};

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating account entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .username("CustomPlayer")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: Vec<u8>,
    username: String,
    hash: Vec<u8>,
    salt: Vec<u8>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - uuid: deterministic 16-byte value derived from an auto-incremented id
    /// - username: `"player{id}"`
    /// - hash / salt: fixed filler bytes (tests that exercise credential
    ///   verification should go through the account service instead)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AccountFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uuid: uuid_from_id(id),
            username: format!("player{}", id),
            hash: vec![0u8; 32],
            salt: vec![0u8; 16],
        }
    }

    /// Sets the uuid for the account.
    ///
    /// # Arguments
    /// - `uuid` - 16-byte account identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn uuid(mut self, uuid: Vec<u8>) -> Self {
        self.uuid = uuid;
        self
    }

    /// Sets the username for the account.
    ///
    /// # Arguments
    /// - `username` - Login name for the account
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            username: ActiveValue::Set(self.username),
            hash: ActiveValue::Set(self.hash),
            salt: ActiveValue::Set(self.salt),
            registered_at: ActiveValue::Set(Utc::now()),
            last_logged_in: ActiveValue::Set(None),
            last_activity: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::account::Model)` - Created account entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
