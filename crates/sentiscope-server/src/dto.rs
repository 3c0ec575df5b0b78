use serde::{Deserialize, Serialize};

use sentiscope_core::SentimentRecord;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Query parameters for listing records.
#[derive(Debug, Deserialize, Default)]
pub struct ListRecordsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListRecordsQuery {
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsListResponse {
    pub records: Vec<SentimentRecord>,
    pub total: u64,
}
