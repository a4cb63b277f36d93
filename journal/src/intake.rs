//! Add-entry workflow: collect, validate, confirm, persist.

use std::io::{BufRead, Write};

use journal_types::JournalEntry;

use crate::console::{BLOCK_END_MARKER, Console};
use crate::db::EntryStore;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Saved(JournalEntry),
    /// User answered anything other than yes; nothing was stored.
    Declined,
    /// Input was blank after trimming; the store was never contacted.
    Empty,
}

/// Run one pass of the add workflow. The store is called at most once, and
/// only after the user confirms non-empty text.
pub fn add_entry<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<IntakeOutcome>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    console.say(&format!(
        "Type your entry. Finish with Ctrl+D or a line containing only '{}':",
        BLOCK_END_MARKER
    ))?;

    let raw = console.read_block()?;
    let content = raw.trim();
    if content.is_empty() {
        console.say("\nNo input received!\n")?;
        return Ok(IntakeOutcome::Empty);
    }

    if !console.confirm("\nDo you want to save this? [yN]")? {
        console.say("\nInput not saved!\n")?;
        return Ok(IntakeOutcome::Declined);
    }

    let entry = store.insert(content)?;
    console.say("\nSaved successfully!\n")?;
    Ok(IntakeOutcome::Saved(entry))
}
