//! Entry table operations (entries)

use chrono::{DateTime, SecondsFormat, Utc};
use journal_types::{JournalEntry, JournalStats};
use rusqlite::types::Type;

use super::{Db, EntryStore};
use crate::error::{JournalError, Result};
use crate::search::{self, SearchFilter};

impl Db {
    /// Store a new entry with a caller-supplied timestamp.
    ///
    /// Content is trimmed before it is stored. The single INSERT is atomic:
    /// either the whole row exists afterwards or nothing does.
    pub fn insert_at(&self, content: &str, timestamp: DateTime<Utc>) -> Result<JournalEntry> {
        let content = content.trim();
        if content.is_empty() {
            return Err(JournalError::Validation(
                "entry content is empty".to_string(),
            ));
        }

        let stamp = encode_timestamp(&timestamp);
        let conn = self.conn();
        conn.execute(
            "INSERT INTO entries (content, timestamp) VALUES (?1, ?2)",
            rusqlite::params![content, &stamp],
        )?;
        let id = conn.last_insert_rowid();
        log::info!("Inserted journal entry {}", id);

        Ok(JournalEntry {
            id,
            content: content.to_string(),
            timestamp: decode_timestamp(1, &stamp)?,
        })
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.conn();
        let total = conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?;
        Ok(total)
    }

    pub fn stats(&self) -> Result<JournalStats> {
        let conn = self.conn();
        let (total, newest, oldest): (i64, Option<String>, Option<String>) = conn.query_row(
            "SELECT COUNT(*), MAX(timestamp), MIN(timestamp) FROM entries",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?;

        Ok(JournalStats {
            total_entries: total,
            newest: newest.map(|s| decode_timestamp(1, &s)).transpose()?,
            oldest: oldest.map(|s| decode_timestamp(2, &s)).transpose()?,
        })
    }
}

impl EntryStore for Db {
    /// Store a new entry stamped with the current time.
    fn insert(&self, content: &str) -> Result<JournalEntry> {
        self.insert_at(content, Utc::now())
    }

    /// Snapshot of entries, newest first, optionally filtered.
    ///
    /// Ties on timestamp are broken by insertion order, later inserts first.
    /// The result is fully materialized before returning, so deleting rows
    /// afterwards never changes it.
    fn retrieve(&self, filter: Option<&SearchFilter>) -> Result<Vec<JournalEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, content, timestamp
             FROM entries
             ORDER BY timestamp DESC, id DESC",
        )?;

        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .filter(|entry| search::matches(filter, &entry.content))
            .collect::<Vec<_>>();

        log::debug!(
            "Retrieved {} entries (filter: {:?})",
            entries.len(),
            filter.map(SearchFilter::query)
        );
        Ok(entries)
    }

    /// Remove an entry permanently.
    fn delete(&self, id: i64) -> Result<()> {
        let conn = self.conn();
        let rows_affected = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        if rows_affected == 0 {
            log::warn!("Delete requested for missing journal entry {}", id);
            return Err(JournalError::NotFound(id));
        }
        log::info!("Deleted journal entry {}", id);
        Ok(())
    }
}

/// Fixed-width UTC text with full nanoseconds, so lexical order in SQLite
/// equals time order and the stored value is exactly the insert instant.
fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<JournalEntry> {
    let raw: String = row.get(2)?;
    Ok(JournalEntry {
        id: row.get(0)?,
        content: row.get(1)?,
        timestamp: decode_timestamp(2, &raw)?,
    })
}
