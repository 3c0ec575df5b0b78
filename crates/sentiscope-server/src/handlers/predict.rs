//! Prediction endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sentiscope_core::{SentimentRequest, SentimentResponse};

use crate::error::AppError;
use crate::services::prediction as prediction_service;
use crate::AppState;

/// POST /predict - Classify text and record the prediction.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    let response = prediction_service::predict(&state, request).await?;
    Ok(Json(response))
}
