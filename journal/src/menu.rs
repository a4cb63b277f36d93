//! Top-level interactive menu.

use std::io::{BufRead, Write};

use crate::browser;
use crate::console::Console;
use crate::db::EntryStore;
use crate::error::{JournalError, Result};
use crate::intake;

/// Menu choices, one keystroke each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add an entry: `a`
    Add,
    /// View all entries: `v`
    View,
    /// Search entries: `s`
    Search,
    /// Quit: `q`
    Quit,
}

impl Command {
    /// Options in display order.
    pub const MENU: [Command; 4] = [Command::Add, Command::View, Command::Search, Command::Quit];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(Self::Add),
            "v" => Some(Self::View),
            "s" => Some(Self::Search),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Self::Add => 'a',
            Self::View => 'v',
            Self::Search => 's',
            Self::Quit => 'q',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add an entry",
            Self::View => "View all journal entries",
            Self::Search => "Search for an entry",
            Self::Quit => "Quit",
        }
    }
}

/// Show the menu until the user quits or input ends.
///
/// Store failures inside a handler are reported and the menu is shown
/// again; console failures end the session.
pub fn run_menu<S, R, W>(store: &S, console: &mut Console<R, W>) -> Result<()>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        console.clear()?;
        console.say("Here's your journal. Add, view, search and delete entries.")?;
        console.say("Press q to quit\n")?;
        for command in Command::MENU {
            console.say(&format!("{}) {}", command.key(), command.label()))?;
        }

        let Some(choice) = console.prompt("\nChoose one of the options above:")? else {
            log::debug!("Input closed, leaving menu");
            return Ok(());
        };
        let Some(command) = Command::parse(&choice) else {
            log::debug!("Ignoring unknown menu choice {:?}", choice.trim());
            continue;
        };
        log::debug!("Menu command: {:?}", command);

        console.clear()?;
        let result = match command {
            Command::Add => intake::add_entry(store, console).map(|_| ()),
            Command::View => browser::view_entries(store, console, None).map(|_| ()),
            Command::Search => browser::search_entries(store, console).map(|_| ()),
            Command::Quit => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(e @ JournalError::Io(_)) => return Err(e),
            Err(e) => {
                log::error!("{} failed: {}", command.label(), e);
                console.say(&format!("\nSomething went wrong: {}\n", e))?;
            }
        }
    }
}
