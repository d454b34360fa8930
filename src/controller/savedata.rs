use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::TokenGuard,
    model::savedata::SaveDataQuery,
    service::savedata::SaveDataService,
    state::AppState,
};

/// GET /api/savedata/get - Fetch one save document
///
/// Returns the system save (`datatype=0`) or the session save for a slot
/// (`datatype=1`). The document is returned verbatim; the server never
/// interprets its contents.
///
/// # Authentication
/// Requires a valid session token in the Authorization header
///
/// # Query Parameters
/// - `datatype`: Save-data discriminator (0 = system, 1 = session)
/// - `slot`: Session slot index, defaults to 0
///
/// # Returns
/// - `200 OK`: The stored JSON save document
/// - `400 Bad Request`: Invalid datatype or slot out of range
/// - `404 Not Found`: No save stored
/// - `401 Unauthorized`: Missing, unknown, or expired token
pub async fn get_save_data(
    State(state): State<AppState>,
    Query(query): Query<SaveDataQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let uuid = TokenGuard::new(&state.db).require(&headers).await?;

    let save_service = SaveDataService::new(&state.db);
    let data = save_service.get(&uuid, query.datatype, query.slot).await?;

    Ok((StatusCode::OK, Json(data)))
}

/// POST /api/savedata/update - Store one save document
///
/// Upserts the save document for the addressed category and slot.
///
/// # Authentication
/// Requires a valid session token in the Authorization header
///
/// # Query Parameters
/// - `datatype`: Save-data discriminator (0 = system, 1 = session)
/// - `slot`: Session slot index, defaults to 0
///
/// # Returns
/// - `204 No Content`: Document stored
/// - `400 Bad Request`: Invalid datatype or slot out of range
/// - `401 Unauthorized`: Missing, unknown, or expired token
pub async fn update_save_data(
    State(state): State<AppState>,
    Query(query): Query<SaveDataQuery>,
    headers: HeaderMap,
    Json(data): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = TokenGuard::new(&state.db).require(&headers).await?;

    let save_service = SaveDataService::new(&state.db);
    save_service
        .update(&uuid, query.datatype, query.slot, data)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/savedata/delete - Delete one save record
///
/// Routes by datatype: deletes the account-wide system save or the session
/// save for the given slot. Validation failures are rejected before any
/// persistence call.
///
/// # Authentication
/// Requires a valid session token in the Authorization header
///
/// # Query Parameters
/// - `datatype`: Save-data discriminator (0 = system, 1 = session)
/// - `slot`: Session slot index, defaults to 0
///
/// # Returns
/// - `200 OK`: Record deleted (or none existed)
/// - `400 Bad Request`: Invalid datatype or slot out of range
/// - `401 Unauthorized`: Missing, unknown, or expired token
pub async fn delete_save_data(
    State(state): State<AppState>,
    Query(query): Query<SaveDataQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let uuid = TokenGuard::new(&state.db).require(&headers).await?;

    let save_service = SaveDataService::new(&state.db);
    save_service
        .delete(&uuid, query.datatype, query.slot)
        .await?;

    Ok(StatusCode::OK)
}
