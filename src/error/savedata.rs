use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation failures for save-data requests.
///
/// These are routine request errors, rejected before any persistence call is
/// made, and are never fatal to the process.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SaveDataError {
    /// Session slot index outside the valid slot range.
    #[error("slot id {0} out of range")]
    SlotOutOfRange(i32),

    /// Data type discriminator other than system (0) or session (1).
    #[error("invalid data type {0}")]
    InvalidDataType(i32),
}

/// Converts save-data validation errors into 400 Bad Request responses.
impl IntoResponse for SaveDataError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
