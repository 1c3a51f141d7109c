use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::DocumentParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file found")]
    MissingResumeFile,

    #[error("Error reading PDF file: {0}")]
    DocumentParse(#[from] DocumentParseError),

    #[error("Resume upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingResumeFile => StatusCode::BAD_REQUEST,
            AppError::DocumentParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingResumeFile | AppError::PayloadTooLarge(_) => {
                tracing::warn!("Rejected analysis request: {self}");
                self.to_string()
            }
            AppError::DocumentParse(e) => {
                tracing::warn!("Document parse error: {e}");
                self.to_string()
            }
            AppError::Internal(e) => {
                // Cause stays in the logs; clients only see a generic message.
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
