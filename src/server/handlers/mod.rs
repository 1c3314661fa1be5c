//! HTTP handlers for the server.

pub mod editor;
pub mod export;
pub mod pages;
pub mod projects;
pub mod upload;

use axum::{Json, http::StatusCode};
use serde::Serialize;

use crate::error::TesseraError;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Status code for a crate error.
pub fn error_status(err: &TesseraError) -> StatusCode {
    match err {
        TesseraError::NotFound(_) => StatusCode::NOT_FOUND,
        TesseraError::LimitExceeded { .. } => StatusCode::FORBIDDEN,
        TesseraError::UnknownComponentType(_)
        | TesseraError::MinimumItemCountViolation { .. }
        | TesseraError::MalformedPersistedState(_)
        | TesseraError::InvalidFieldPath(_)
        | TesseraError::UploadFailure(_)
        | TesseraError::Json(_) => StatusCode::BAD_REQUEST,
        TesseraError::SaveFailure(_) | TesseraError::Http(_) | TesseraError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TesseraError> for (StatusCode, Json<ErrorBody>) {
    fn from(err: TesseraError) -> Self {
        api_error(error_status(&err), err.to_string())
    }
}
