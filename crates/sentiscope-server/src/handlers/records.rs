//! Prediction history handlers. Read-only.

use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use sentiscope_core::{RecordQuery, RecordSummary, SentimentRecord};

use crate::dto::{ListRecordsQuery, RecordsListResponse};
use crate::error::AppError;
use crate::services::records as records_service;
use crate::AppState;

/// GET /records - List records, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListRecordsQuery>, QueryRejection>,
) -> Result<Json<RecordsListResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    let query = RecordQuery {
        limit: Some(params.page_size()),
        offset: params.offset,
    };

    let (records, total) = records_service::list(&state, query).await?;
    Ok(Json(RecordsListResponse { records, total }))
}

/// GET /records/{id} - Get a single record.
pub async fn get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SentimentRecord>, AppError> {
    let Path(id) = id.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    let record = records_service::get(&state, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("record {} not found", id)))?;

    Ok(Json(record))
}

/// GET /records/summary - Per-label counts and average confidence.
pub async fn summary(State(state): State<Arc<AppState>>) -> Result<Json<RecordSummary>, AppError> {
    Ok(Json(records_service::summary(&state).await?))
}
