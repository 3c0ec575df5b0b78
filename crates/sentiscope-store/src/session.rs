//! Scoped access to the record store connection.

use std::sync::MutexGuard;

use rusqlite::{params, Connection, Row};
use sentiscope_core::{
    LabelSummary, NewSentimentRecord, RecordQuery, RecordSummary, SentimentRecord, StoreError,
};

use crate::db_err;

const SELECT_RECORD: &str =
    "SELECT id, text, sentiment, confidence, created_at FROM sentiment_records";

/// Exclusive handle on the connection for one unit of work.
///
/// Writes run in a transaction that rolls back unless committed. Dropping the
/// session releases the connection even when the caller bails out early.
pub struct Session<'a> {
    conn: MutexGuard<'a, Connection>,
}

/// Row as stored; confidence is still text.
struct RawRecord {
    id: i64,
    text: String,
    sentiment: String,
    confidence: String,
    created_at: String,
}

impl RawRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            text: row.get(1)?,
            sentiment: row.get(2)?,
            confidence: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn decode(self) -> Result<SentimentRecord, StoreError> {
        let confidence = self.confidence.parse::<f64>().map_err(|_| {
            StoreError::Corrupt(format!(
                "record {} has non-numeric confidence '{}'",
                self.id, self.confidence
            ))
        })?;
        Ok(SentimentRecord {
            id: self.id,
            text: self.text,
            sentiment: self.sentiment,
            confidence,
            created_at: self.created_at,
        })
    }
}

impl<'a> Session<'a> {
    pub(crate) fn new(conn: MutexGuard<'a, Connection>) -> Self {
        Self { conn }
    }

    pub(crate) fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS sentiment_records (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    text TEXT NOT NULL,
                    sentiment TEXT NOT NULL,
                    confidence TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT (datetime('now'))
                );

                CREATE INDEX IF NOT EXISTS idx_sentiment_records_sentiment
                    ON sentiment_records(sentiment);
                "#,
            )
            .map_err(db_err)
    }

    /// Inserts a record, commits, and reads it back with its assigned id.
    pub fn append(&mut self, record: &NewSentimentRecord) -> Result<SentimentRecord, StoreError> {
        let tx = self.conn.transaction().map_err(db_err)?;
        tx.execute(
            "INSERT INTO sentiment_records (text, sentiment, confidence) VALUES (?1, ?2, ?3)",
            params![record.text, record.sentiment, record.confidence.to_string()],
        )
        .map_err(db_err)?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(db_err)?;

        self.fetch(id)?
            .ok_or_else(|| StoreError::Corrupt(format!("record {} missing after commit", id)))
    }

    pub fn fetch(&self, id: i64) -> Result<Option<SentimentRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_RECORD))
            .map_err(db_err)?;

        match stmt.query_row(params![id], RawRecord::from_row) {
            Ok(raw) => raw.decode().map(Some),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(db_err(e)),
        }
    }

    pub fn list(&self, query: &RecordQuery) -> Result<Vec<SentimentRecord>, StoreError> {
        // LIMIT -1 is unbounded in SQLite
        let limit = query.limit.map(i64::from).unwrap_or(-1);
        let offset = query.offset.map(i64::from).unwrap_or(0);

        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id DESC LIMIT ?1 OFFSET ?2", SELECT_RECORD))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![limit, offset], RawRecord::from_row)
            .map_err(db_err)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(db_err)?.decode()?);
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sentiment_records", [], |r| r.get(0))
            .map_err(db_err)?;
        Ok(count.max(0) as u64)
    }

    pub fn summary(&self) -> Result<RecordSummary, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                r#"SELECT sentiment, COUNT(*), COALESCE(AVG(CAST(confidence AS REAL)), 0)
                   FROM sentiment_records
                   GROUP BY sentiment
                   ORDER BY sentiment"#,
            )
            .map_err(db_err)?;

        let rows = stmt
            .query_map([], |row| {
                let count: i64 = row.get(1)?;
                Ok(LabelSummary {
                    sentiment: row.get(0)?,
                    count: count.max(0) as u64,
                    avg_confidence: row.get(2)?,
                })
            })
            .map_err(db_err)?;

        let mut labels = Vec::new();
        for row in rows {
            labels.push(row.map_err(db_err)?);
        }

        Ok(RecordSummary {
            total_records: labels.iter().map(|l| l.count).sum(),
            labels,
        })
    }

    #[cfg(test)]
    pub(crate) fn raw_confidence(&self, id: i64) -> Result<(String, String), StoreError> {
        self.conn
            .query_row(
                "SELECT typeof(confidence), confidence FROM sentiment_records WHERE id = ?1",
                params![id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(db_err)
    }
}
