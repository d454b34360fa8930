use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a request to a protected endpoint.
    #[error("missing Authorization header")]
    MissingToken,

    /// Session token not found in the session table.
    #[error("invalid session token")]
    InvalidToken,

    /// Session token found but past its expiry.
    #[error("session token expired")]
    TokenExpired,

    /// Registration attempted with a username that is already taken.
    #[error("username is already taken")]
    UsernameTaken,

    /// Login attempted with an unknown username or a wrong password.
    ///
    /// The two cases share one variant so the response does not reveal
    /// whether the username exists.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid, or expired tokens; failed logins
/// - 409 Conflict - Username already taken during registration
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
