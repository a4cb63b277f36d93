//! Single-user text journal backed by SQLite.
//!
//! Entries are appended through the add workflow ([`intake`]), browsed newest
//! first with optional substring search ([`browser`]), and deleted one at a
//! time after confirmation. All persistence goes through [`db::Db`].

pub mod browser;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod intake;
pub mod menu;
pub mod search;

#[cfg(test)]
mod test_support;

pub use db::{Db, EntryStore};
pub use error::{JournalError, Result};
pub use journal_types::JournalEntry;
