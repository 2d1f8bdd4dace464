use crate::storage::StorageError;
use crate::validation::ValidationFailure;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Validation failed")]
    Validation(Vec<ValidationFailure>),

    #[error("Internal storage error")]
    InternalStorage(#[source] StorageError),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::InternalStorage(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "AppError");

        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InternalStorage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Validation(failures) => Json(json!({
                "error": self.as_ref(),
                "message": self.to_string(),
                "failures": failures,
            })),
            _ => Json(json!({
                "error": self.as_ref(),
                "message": self.to_string(),
            })),
        };

        (status, body).into_response()
    }
}
