//! Classify-and-persist flow behind `POST /predict`.

use std::sync::Arc;

use sentiscope_core::{
    NewSentimentRecord, Prediction, Predictor, RecordStore, SentimentRecord, SentimentRequest,
    SentimentResponse,
};
use tracing::info;

use crate::error::AppError;
use crate::AppState;

/// Rejects text with no visible characters.
pub fn validate(request: &SentimentRequest) -> Result<(), AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Input("text must not be empty".into()));
    }
    Ok(())
}

/// Classifies the request text and commits one record before responding.
///
/// Inference and the database round trip both block, so they run on the
/// blocking pool.
pub async fn predict(state: &AppState, request: SentimentRequest) -> Result<SentimentResponse, AppError> {
    validate(&request)?;

    let predictor = Arc::clone(&state.predictor);
    let store = Arc::clone(&state.store);

    let (prediction, record) = tokio::task::spawn_blocking(move || {
        classify_and_record(predictor.as_ref(), store.as_ref(), request.text)
    })
    .await
    .map_err(|e| AppError::internal(format!("prediction task failed: {}", e)))??;

    info!(
        record_id = record.id,
        sentiment = %prediction.label,
        confidence = prediction.confidence(),
        "Prediction recorded"
    );

    Ok(SentimentResponse::from(&prediction))
}

fn classify_and_record(
    predictor: &dyn Predictor,
    store: &dyn RecordStore,
    text: String,
) -> Result<(Prediction, SentimentRecord), AppError> {
    let prediction = predictor.classify(&text)?;
    let record = store.append(&NewSentimentRecord::from_prediction(text, &prediction))?;
    Ok((prediction, record))
}
