//! Persisted prediction history.

use serde::{Deserialize, Serialize};

use crate::{Prediction, StoreError};

/// A prediction about to be written. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSentimentRecord {
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
}

impl NewSentimentRecord {
    pub fn from_prediction(text: impl Into<String>, prediction: &Prediction) -> Self {
        Self {
            text: text.into(),
            sentiment: prediction.label.clone(),
            confidence: prediction.confidence(),
        }
    }
}

/// One row of the prediction history. Write-once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub id: i64,
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub created_at: String,
}

/// Pagination for listing records, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Per-label aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSummary {
    pub sentiment: String,
    pub count: u64,
    pub avg_confidence: f64,
}

/// Aggregate view over the whole history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordSummary {
    pub total_records: u64,
    pub labels: Vec<LabelSummary>,
}

/// Append-only storage for [`SentimentRecord`]s.
///
/// Records are never updated or deleted.
pub trait RecordStore: Send + Sync {
    /// Inserts and commits a record, returning it with its assigned id.
    fn append(&self, record: &NewSentimentRecord) -> Result<SentimentRecord, StoreError>;

    /// Fetches a single record.
    fn get(&self, id: i64) -> Result<Option<SentimentRecord>, StoreError>;

    /// Lists records, newest first.
    fn list(&self, query: &RecordQuery) -> Result<Vec<SentimentRecord>, StoreError>;

    /// Number of stored records.
    fn count(&self) -> Result<u64, StoreError>;

    /// Per-label counts and average confidence.
    fn summary(&self) -> Result<RecordSummary, StoreError>;
}
