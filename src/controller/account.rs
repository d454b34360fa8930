use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{session_token, TokenGuard},
    model::account::CredentialsDto,
    service::account::AccountService,
    state::AppState,
};

/// POST /api/account/register - Create a new account
///
/// Registers an account with the submitted username and password. The
/// password is salted and hashed server-side; the uuid is generated here and
/// never chosen by the client.
///
/// # Returns
/// - `201 Created`: Account created
/// - `409 Conflict`: Username already taken
/// - `500 Internal Server Error`: Database error
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);
    account_service.register(body).await?;

    Ok(StatusCode::CREATED)
}

/// POST /api/account/login - Exchange credentials for a session token
///
/// # Returns
/// - `200 OK`: JSON SessionDto carrying the token for the Authorization header
/// - `401 Unauthorized`: Unknown username or wrong password
/// - `500 Internal Server Error`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);
    let session = account_service.login(body).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// GET /api/account/logout - Invalidate the presented session token
///
/// Deletes the session named by the Authorization header. A token that is
/// already invalid still logs out successfully.
///
/// # Authentication
/// Requires the Authorization header to be present (but not valid)
///
/// # Returns
/// - `200 OK`: Session invalidated
/// - `401 Unauthorized`: Missing Authorization header
/// - `500 Internal Server Error`: Database error
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = session_token(&headers)?;

    let account_service = AccountService::new(&state.db);
    account_service.logout(token).await?;

    Ok(StatusCode::OK)
}

/// GET /api/account/info - Get the authenticated account's information
///
/// # Authentication
/// Requires a valid session token in the Authorization header
///
/// # Returns
/// - `200 OK`: JSON AccountInfoDto
/// - `401 Unauthorized`: Missing, unknown, or expired token
/// - `500 Internal Server Error`: Database error
pub async fn info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let uuid = TokenGuard::new(&state.db).require(&headers).await?;

    let account_service = AccountService::new(&state.db);
    let account = account_service.info(&uuid).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
