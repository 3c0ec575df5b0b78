//! Read access to the prediction history.
//!
//! Store calls take the connection lock and hit SQLite, so they run on the
//! blocking pool like the prediction flow.

use std::sync::Arc;

use sentiscope_core::{RecordQuery, RecordStore, RecordSummary, SentimentRecord};

use crate::error::AppError;
use crate::AppState;

async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn RecordStore) -> Result<T, AppError> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || f(store.as_ref()))
        .await
        .map_err(|e| AppError::internal(format!("store task failed: {}", e)))?
}

/// Returns one page of records and the total row count.
pub async fn list(state: &AppState, query: RecordQuery) -> Result<(Vec<SentimentRecord>, u64), AppError> {
    with_store(state, move |store| {
        let records = store.list(&query)?;
        let total = store.count()?;
        Ok((records, total))
    })
    .await
}

pub async fn get(state: &AppState, id: i64) -> Result<Option<SentimentRecord>, AppError> {
    with_store(state, move |store| Ok(store.get(id)?)).await
}

pub async fn summary(state: &AppState) -> Result<RecordSummary, AppError> {
    with_store(state, |store| Ok(store.summary()?)).await
}
