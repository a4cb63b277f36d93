//! Journal: interactive terminal journal.
//!
//! Database location: JOURNAL_DB_PATH (default ./journal.db).
//!
//! Ctrl+C checkpoints the write-ahead log and exits with status 130. Every
//! write is a single committed statement, so an interrupt never leaves a
//! partial entry behind.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use journal::config::Config;
use journal::console::Console;
use journal::db::Db;
use journal::menu;

/// Exit status for a process ended by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    log::info!("Opening database at: {}", config.database_path);
    let db = match Db::open(&config.database_path) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            eprintln!("Could not open journal at {}: {}", config.database_path, e);
            return ExitCode::FAILURE;
        }
    };

    let interrupt_db = Arc::clone(&db);
    if let Err(e) = ctrlc::set_handler(move || {
        log::info!("Interrupted, closing journal");
        if let Err(e) = interrupt_db.checkpoint() {
            log::warn!("WAL checkpoint on interrupt failed: {}", e);
        }
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }) {
        log::warn!("Could not install Ctrl+C handler: {}", e);
    }

    match db.stats() {
        Ok(stats) => log::info!("Journal holds {} entries", stats.total_entries),
        Err(e) => log::warn!("Could not read journal stats: {}", e),
    }

    let stdin = io::stdin();
    let mut console =
        Console::new(stdin.lock(), io::stdout()).with_clear_screen(config.clear_screen);

    match menu::run_menu(db.as_ref(), &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Journal session ended with error: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
