//! Sync outcome types

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Result of one complete sync run
#[derive(Debug, Clone)]
pub struct SyncOutcome<T> {
    /// All accumulated records, in server-returned order across pages
    pub records: Vec<T>,
    /// Maximum update timestamp across `records`, or `None` when the run
    /// returned nothing, in which case the stored bookmark must stay unchanged
    pub new_bookmark: Option<DateTime<Utc>>,
    /// Server-reported total match count from the first page, informational
    pub total_count: Option<i64>,
    /// Run statistics
    pub stats: SyncStats,
}

impl<T> SyncOutcome<T> {
    /// Number of records retrieved
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run retrieved no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Statistics from a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total records fetched
    pub records_fetched: usize,
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_fetched += count;
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Set duration
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_duration(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis() as u64;
    }
}
