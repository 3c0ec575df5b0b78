//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sentiscope_core::{PredictorError, StoreError};
use thiserror::Error;
use tracing::error;

use crate::dto::ErrorResponse;

/// Request failures, one variant per fault source.
///
/// Predictor, storage and internal faults are logged in full and reach the
/// client only as a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("predictor fault: {0}")]
    Predictor(#[from] PredictorError),

    #[error("storage fault: {0}")]
    Storage(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Creates an Internal error from any error type.
    pub fn internal(e: impl std::fmt::Display) -> Self {
        AppError::Internal(e.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Predictor(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller.
    pub fn public_detail(&self) -> String {
        match self {
            AppError::Input(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Predictor(_) => "prediction failed".to_string(),
            AppError::Storage(_) => "storage unavailable".to_string(),
            AppError::Internal(_) => "internal error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        }
        (status, Json(ErrorResponse { detail: self.public_detail() })).into_response()
    }
}
