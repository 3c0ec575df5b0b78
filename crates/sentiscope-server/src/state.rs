//! Shared dependencies handed to every request.

use std::sync::Arc;

use sentiscope_core::{Predictor, RecordStore};

/// Explicitly constructed service context.
///
/// The predictor is read-only; the store hands out one scoped session per call.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, store: Arc<dyn RecordStore>) -> Self {
        Self { predictor, store }
    }
}
