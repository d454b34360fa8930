//! Account service for business logic.
//!
//! Orchestrates registration, login, logout, and account info retrieval.
//! Credential material (salt and hash) never leaves this layer.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{account::AccountRepository, session::SessionRepository},
    error::{auth::AuthError, AppError},
    model::account::{Account, CreateAccountParam, CredentialsDto, SessionDto},
    util::credentials,
};

/// Days a login session stays valid.
const SESSION_TTL_DAYS: i64 = 7;

/// Service providing business logic for account management.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Rejects the registration if the username is taken, otherwise generates
    /// a fresh uuid and salt, hashes the password, and stores the account.
    ///
    /// # Arguments
    /// - `credentials_dto` - Submitted username and password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::AuthErr(UsernameTaken))` - Username already in use
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn register(&self, credentials_dto: CredentialsDto) -> Result<Account, AppError> {
        let account_repo = AccountRepository::new(self.db);

        if account_repo
            .username_exists(&credentials_dto.username)
            .await?
        {
            return Err(AuthError::UsernameTaken.into());
        }

        let salt = credentials::generate_salt();
        let hash = credentials::hash_password(&salt, &credentials_dto.password);

        let account = account_repo
            .create(CreateAccountParam {
                uuid: credentials::generate_uuid(),
                username: credentials_dto.username,
                hash,
                salt,
            })
            .await?;

        Ok(account)
    }

    /// Verifies credentials and mints a session token.
    ///
    /// An unknown username and a wrong password produce the same error so the
    /// response does not reveal which accounts exist. On success the session
    /// is persisted with an expiry and the last-logged-in timestamp is
    /// stamped.
    ///
    /// # Arguments
    /// - `credentials_dto` - Submitted username and password
    ///
    /// # Returns
    /// - `Ok(SessionDto)` - Freshly minted session token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during verification or session creation
    pub async fn login(&self, credentials_dto: CredentialsDto) -> Result<SessionDto, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account) = account_repo
            .find_by_username(&credentials_dto.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let hash = credentials::hash_password(&account.salt, &credentials_dto.password);
        if hash != account.hash {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = credentials::generate_token();
        let session_repo = SessionRepository::new(self.db);
        session_repo
            .create(
                &token,
                &account.uuid,
                Utc::now() + Duration::days(SESSION_TTL_DAYS),
            )
            .await?;

        account_repo.update_last_logged_in(&account.uuid).await?;

        Ok(SessionDto { token })
    }

    /// Deletes the presented session.
    ///
    /// Logging out with an already-invalid token is not an error.
    ///
    /// # Arguments
    /// - `token` - Session token from the Authorization header
    ///
    /// # Returns
    /// - `Ok(())` - Session removed (or none existed)
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db).delete(token).await?;
        Ok(())
    }

    /// Fetches account information for an authenticated uuid.
    ///
    /// # Arguments
    /// - `uuid` - Account identifier resolved by the token guard
    ///
    /// # Returns
    /// - `Ok(Account)` - Account domain model
    /// - `Err(AppError::NotFound)` - No account with that uuid
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn info(&self, uuid: &[u8]) -> Result<Account, AppError> {
        let account = AccountRepository::new(self.db).find_by_uuid(uuid).await?;
        account.ok_or_else(|| AppError::NotFound("account not found".to_string()))
    }
}
