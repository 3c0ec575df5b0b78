//! Core domain types and seams for sentiscope.
//!
//! This crate provides the types shared across the sentiscope service:
//!
//! - [`SentimentRequest`] and [`SentimentResponse`] — HTTP payloads for `/predict`
//! - [`Prediction`] — a label together with the distribution it was drawn from
//! - [`Predictor`] — the classifier seam, implemented by `sentiscope-model`
//! - [`SentimentRecord`] and [`RecordStore`] — the persisted prediction history
//!
//! # Example
//!
//! ```rust
//! use sentiscope_core::Prediction;
//!
//! let labels = vec!["negative".to_string(), "positive".to_string()];
//! let prediction = Prediction::from_scores(&labels, vec![0.07, 0.93]).unwrap();
//!
//! assert_eq!(prediction.label, "positive");
//! assert_eq!(prediction.confidence(), 0.93);
//! ```

mod prediction;
mod record;

pub use prediction::{LabelScore, ModelInfo, Prediction, Predictor};
pub use record::{LabelSummary, NewSentimentRecord, RecordQuery, RecordStore, RecordSummary, SentimentRecord};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a [`Predictor`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// The model could not score the input.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The model produced a distribution that violates its contract.
    #[error("Invalid model output: {0}")]
    InvalidOutput(String),
}

/// Errors raised by a [`RecordStore`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The underlying database rejected the operation.
    #[error("Database error: {0}")]
    Database(String),

    /// The connection lock was poisoned by a panicking holder.
    #[error("Lock error")]
    Lock,

    /// A stored row could not be decoded.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// The connection string names a backend this store cannot open.
    #[error("Unsupported database url: {0}")]
    UnsupportedUrl(String),
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    pub confidence: f64,
}

impl From<&Prediction> for SentimentResponse {
    fn from(prediction: &Prediction) -> Self {
        Self {
            sentiment: prediction.label.clone(),
            confidence: prediction.confidence(),
        }
    }
}
