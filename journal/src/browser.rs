//! One-at-a-time traversal over a retrieval snapshot, with per-entry
//! continue/delete/quit decisions.

use std::io::{BufRead, Write};

use journal_types::JournalEntry;

use crate::console::Console;
use crate::db::EntryStore;
use crate::error::{JournalError, Result};
use crate::search::SearchFilter;

/// What the user asked for while an entry is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Continue,
    Delete,
    Quit,
}

impl NextAction {
    /// `q` quits, `d` deletes, anything else (including empty input)
    /// continues. End of input quits.
    pub fn parse(input: Option<&str>) -> Self {
        let Some(input) = input else {
            return Self::Quit;
        };
        match input.trim().to_lowercase().as_str() {
            "q" => Self::Quit,
            "d" => Self::Delete,
            _ => Self::Continue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Displaying(usize),
    ConfirmDelete(usize),
    End,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Every entry in the snapshot was visited.
    End,
    /// The user stopped early.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseReport {
    pub shown: usize,
    pub deleted: Vec<i64>,
    pub outcome: BrowseOutcome,
}

/// Browse all entries, or only those matching `filter`, newest first.
pub fn view_entries<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    filter: Option<&SearchFilter>,
) -> Result<BrowseReport>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let snapshot = store.retrieve(filter)?;
    if snapshot.is_empty() {
        console.say("No entries found.")?;
    }
    browse(store, console, &snapshot)
}

/// Ask for a search term, then browse the matching entries.
pub fn search_entries<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<BrowseReport>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let Some(query) = console.prompt("\nType the word you would like to search for")? else {
        return Ok(BrowseReport {
            shown: 0,
            deleted: Vec::new(),
            outcome: BrowseOutcome::Quit,
        });
    };
    let filter = SearchFilter::new(&query);
    view_entries(store, console, filter.as_ref())
}

/// Walk `entries` in order. The slice is never re-queried, so deletions made
/// along the way cannot shift or drop the entries still to be shown.
pub fn browse<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    entries: &[JournalEntry],
) -> Result<BrowseReport>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut shown = 0;
    let mut deleted = Vec::new();
    let mut state = State::Displaying(0);

    loop {
        state = match state {
            State::Displaying(i) if i >= entries.len() => State::End,
            State::Displaying(i) => {
                let entry = &entries[i];
                console.clear()?;
                console.say(&format!("{}\n{}\n", entry.local_timestamp(), entry.content))?;
                shown += 1;

                let answer = console
                    .prompt("\nShow next entry or delete entry? [Y/d/q]")?;
                match NextAction::parse(answer.as_deref()) {
                    NextAction::Continue => State::Displaying(i + 1),
                    NextAction::Delete => State::ConfirmDelete(i),
                    NextAction::Quit => State::Quit,
                }
            }
            State::ConfirmDelete(i) => {
                let entry = &entries[i];
                if confirm_delete(store, console, entry)? {
                    deleted.push(entry.id);
                }
                State::Displaying(i + 1)
            }
            State::End => {
                return Ok(BrowseReport {
                    shown,
                    deleted,
                    outcome: BrowseOutcome::End,
                });
            }
            State::Quit => {
                return Ok(BrowseReport {
                    shown,
                    deleted,
                    outcome: BrowseOutcome::Quit,
                });
            }
        };
    }
}

/// Returns whether the entry was actually removed. A missing entry is
/// reported and swallowed; storage failures propagate.
fn confirm_delete<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    entry: &JournalEntry,
) -> Result<bool>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    if !console.confirm("Are you sure? [yN]")? {
        return Ok(false);
    }
    match store.delete(entry.id) {
        Ok(()) => {
            console.say("Entry deleted!")?;
            Ok(true)
        }
        Err(JournalError::NotFound(_)) => {
            console.say("Entry was already deleted.")?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
