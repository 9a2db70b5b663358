//! Progress persistence.
//!
//! The front end may hand each rating to a [`ProgressSink`]. Submission is
//! fire-and-forget: a failed write is logged and the session carries on
//! with its local state unchanged.

use crate::model::{CardId, PersistenceError};
use crate::state::{Outcome, Rating};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One submitted rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressRecord {
    /// Card that was rated.
    pub card_id: CardId,
    /// The rating given.
    pub outcome: Outcome,
    /// When the rating was submitted.
    pub timestamp: DateTime<Utc>,
}

impl ProgressRecord {
    /// Stamp `rating` with `timestamp`.
    pub fn new(rating: Rating, timestamp: DateTime<Utc>) -> Self {
        Self {
            card_id: rating.card_id,
            outcome: rating.outcome,
            timestamp,
        }
    }
}

/// Destination for ratings.
pub trait ProgressSink {
    /// Record one rating.
    fn submit(&mut self, record: &ProgressRecord) -> Result<(), PersistenceError>;
}

/// Submit `rating` and swallow any failure after logging it.
pub fn submit_rating(sink: &mut dyn ProgressSink, rating: Rating) {
    let record = ProgressRecord::new(rating, Utc::now());
    match sink.submit(&record) {
        Ok(()) => debug!(card = %record.card_id, outcome = ?record.outcome, "Progress submitted"),
        Err(err) => warn!(error = %err, card = %record.card_id, "Progress submission failed"),
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn submit(&mut self, _record: &ProgressRecord) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// Appends one JSON object per rating to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonlProgressLog {
    path: PathBuf,
}

impl JsonlProgressLog {
    /// Log appending to `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProgressSink for JsonlProgressLog {
    fn submit(&mut self, record: &ProgressRecord) -> Result<(), PersistenceError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes()).map_err(|e| self.io_error(e))
    }
}

/// Sink for an optional configured path.
pub fn sink_for(path: Option<PathBuf>) -> Box<dyn ProgressSink> {
    match path {
        Some(path) => Box::new(JsonlProgressLog::new(path)),
        None => Box::new(NullSink),
    }
}
