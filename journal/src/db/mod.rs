//! SQLite persistence for journal entries.

mod entries;

use std::sync::{Mutex, MutexGuard};

use journal_types::JournalEntry;
use rusqlite::Connection;

use crate::error::Result;
use crate::search::SearchFilter;

/// Operations the interactive workflows need from a store.
pub trait EntryStore {
    fn insert(&self, content: &str) -> Result<JournalEntry>;
    fn retrieve(&self, filter: Option<&SearchFilter>) -> Result<Vec<JournalEntry>>;
    fn delete(&self, id: i64) -> Result<()>;
}

/// Handle to the journal database. Created once at startup and passed by
/// reference; the connection closes when the handle is dropped.
pub struct Db {
    conn: Mutex<Connection>,
}

impl Db {
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Create the schema if it is missing. Safe to call any number of times.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL CHECK (length(trim(content)) > 0),
                timestamp TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_entries_timestamp
             ON entries(timestamp DESC, id DESC)",
            [],
        )?;
        log::debug!("Journal schema initialized");
        Ok(())
    }

    /// Fold the write-ahead log back into the main database file and
    /// truncate it. Used before an interrupted process exits.
    pub fn checkpoint(&self) -> Result<()> {
        let conn = self.conn();
        let (busy, log_frames, moved): (i64, i64, i64) =
            conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |r| {
                Ok((r.get(0)?, r.get(1)?, r.get(2)?))
            })?;
        log::debug!(
            "WAL checkpoint: busy={} frames={} checkpointed={}",
            busy,
            log_frames,
            moved
        );
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // Each critical section is a single SQLite call; poison leaves no
        // half-applied state behind.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}
