use axum::http::{header, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
};

/// Extracts the session token from the `Authorization` header.
///
/// The header carries the hex-encoded token issued at login, with no scheme
/// prefix.
pub fn session_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)
}

/// Resolves the session token on a request to an account uuid.
///
/// Controllers construct a guard per request and call `require` before doing
/// any work on behalf of the caller. The uuid is treated as opaque from here
/// on; no format validation is performed.
pub struct TokenGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires a valid, unexpired session token on the request.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the Authorization token
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The uuid of the account owning the session
    /// - `Err(AppError::AuthErr)` - Missing, unknown, or expired token
    /// - `Err(AppError::DbErr)` - Database error during session lookup
    pub async fn require(&self, headers: &HeaderMap) -> Result<Vec<u8>, AppError> {
        let token = session_token(headers)?;

        let session_repo = SessionRepository::new(self.db);
        let Some(session) = session_repo.find_by_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if session.expires_at <= Utc::now() {
            return Err(AuthError::TokenExpired.into());
        }

        Ok(session.uuid)
    }
}
