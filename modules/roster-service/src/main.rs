//! Roster Service — reconciles a name→points mapping into the students table.
//!
//! Each run inserts new students, updates changed scores, and leaves
//! everything else alone, so running it repeatedly is harmless.
//! Database: ROSTER_DB_PATH (default ./students.db).
//! Scores: ROSTER_SCORES_PATH, a JSON object of `{"name": points}`; the
//! built-in roster is used when unset.

mod db;
mod scores;

use std::process::ExitCode;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    let db_path =
        std::env::var("ROSTER_DB_PATH").unwrap_or_else(|_| "./students.db".to_string());

    let roster = match std::env::var("ROSTER_SCORES_PATH") {
        Ok(path) => match scores::load_file(&path) {
            Ok(roster) => roster,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => scores::default_roster(),
    };

    log::info!("Opening database at: {}", db_path);
    let database = match db::Db::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let summary = match database.upsert_scores(&roster) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Roster reconciled: {} inserted, {} updated, {} unchanged",
        summary.inserted,
        summary.updated,
        summary.unchanged
    );

    match database.list_students() {
        Ok(students) => {
            for student in students {
                println!("{:>4}  {:<20} {:>6}", student.id, student.username, student.points);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
