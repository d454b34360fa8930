//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records in the
//! database. It handles account creation, lookups, and activity timestamp management
//! with conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::account::{Account, CreateAccountParam};

/// Repository providing database operations for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and updating account records.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account from parameter model.
    ///
    /// Inserts a new account row with the provided identity and credential
    /// material. The registration timestamp is set to the current time.
    ///
    /// # Arguments
    /// - `param` - Account creation parameters including uuid, username, hash, and salt
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account as a domain model
    /// - `Err(DbErr)` - Database error during insert (including unique-username violations)
    pub async fn create(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            uuid: ActiveValue::Set(param.uuid),
            username: ActiveValue::Set(param.username),
            hash: ActiveValue::Set(param.hash),
            salt: ActiveValue::Set(param.salt),
            registered_at: ActiveValue::Set(Utc::now()),
            last_logged_in: ActiveValue::Set(None),
            last_activity: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its uuid.
    ///
    /// # Arguments
    /// - `uuid` - Opaque 16-byte account identifier
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that uuid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uuid(&self, uuid: &[u8]) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(uuid.to_vec())
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by username, returning the full entity model.
    ///
    /// Unlike the other lookup methods this returns the entity model rather
    /// than the domain model: the login flow needs the stored hash and salt to
    /// verify the submitted password, and those fields are deliberately absent
    /// from the domain model.
    ///
    /// # Arguments
    /// - `username` - Login name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account entity with credential material
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether a username is already taken.
    ///
    /// # Arguments
    /// - `username` - Login name to check
    ///
    /// # Returns
    /// - `Ok(true)` - An account with that username exists
    /// - `Ok(false)` - The username is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stamps the account's last-activity timestamp with the current time.
    ///
    /// Used as an advisory bookkeeping operation by the save-data service; a
    /// missing account is not an error (the update simply affects no rows).
    ///
    /// # Arguments
    /// - `uuid` - Opaque 16-byte account identifier
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching account found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_last_activity(&self, uuid: &[u8]) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Uuid.eq(uuid.to_vec()))
            .col_expr(
                entity::account::Column::LastActivity,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stamps the account's last-logged-in timestamp with the current time.
    ///
    /// # Arguments
    /// - `uuid` - Opaque 16-byte account identifier
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching account found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_last_logged_in(&self, uuid: &[u8]) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Uuid.eq(uuid.to_vec()))
            .col_expr(
                entity::account::Column::LastLoggedIn,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
