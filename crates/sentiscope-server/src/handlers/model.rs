use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use sentiscope_core::ModelInfo;

use crate::AppState;

/// GET /model - Describe the loaded predictor.
pub async fn info(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    Json(state.predictor.info())
}
