//! Shared types for the journal store and its front ends.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

// =====================================================
// Domain Types
// =====================================================

/// One persisted journal note.
///
/// Values are owned snapshots of a row: deleting the row later does not
/// touch a `JournalEntry` that was already read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Timestamp rendered in the local timezone for display.
    pub fn local_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalStats {
    pub total_entries: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<DateTime<Utc>>,
}
