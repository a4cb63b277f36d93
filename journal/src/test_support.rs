//! Shared fixtures for workflow tests.

use std::cell::Cell;
use std::io::Cursor;

use journal_types::JournalEntry;

use crate::console::Console;
use crate::db::{Db, EntryStore};
use crate::error::Result;
use crate::search::SearchFilter;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from a fixed script, capturing everything written.
pub fn scripted(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// In-memory store that counts the mutating calls made against it.
pub struct CountingStore {
    db: Db,
    inserts: Cell<usize>,
    deletes: Cell<usize>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            db: Db::open(":memory:").expect("in-memory db"),
            inserts: Cell::new(0),
            deletes: Cell::new(0),
        }
    }

    pub fn inserts(&self) -> usize {
        self.inserts.get()
    }

    pub fn deletes(&self) -> usize {
        self.deletes.get()
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

impl EntryStore for CountingStore {
    fn insert(&self, content: &str) -> Result<JournalEntry> {
        self.inserts.set(self.inserts.get() + 1);
        self.db.insert(content)
    }

    fn retrieve(&self, filter: Option<&SearchFilter>) -> Result<Vec<JournalEntry>> {
        self.db.retrieve(filter)
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.deletes.set(self.deletes.get() + 1);
        self.db.delete(id)
    }
}

/// Everything the workflow printed.
pub fn output_text(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}
