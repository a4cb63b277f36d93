//! SQLite database operations for the student roster.

use rusqlite::{Connection, ErrorCode, Result as SqliteResult};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub username: String,
    pub points: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpsertSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

pub struct Db {
    conn: Mutex<Connection>,
}

impl Db {
    pub fn open(path: &str) -> SqliteResult<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.create_tables()?;
        Ok(db)
    }

    fn create_tables(&self) -> SqliteResult<()> {
        let conn = self.conn();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                points INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Merge `scores` into the table.
    ///
    /// Each student is inserted; when the username already exists the stored
    /// points are compared and only overwritten if they differ. The batch is
    /// applied in one transaction.
    pub fn upsert_scores(&self, scores: &[(String, i64)]) -> Result<UpsertSummary, String> {
        let mut conn = self.conn();
        let tx = conn
            .transaction()
            .map_err(|e| format!("Failed to begin transaction: {}", e))?;

        let mut summary = UpsertSummary::default();
        for (username, points) in scores {
            let inserted = tx.execute(
                "INSERT INTO students (username, points) VALUES (?1, ?2)",
                rusqlite::params![username, points],
            );
            match inserted {
                Ok(_) => summary.inserted += 1,
                Err(rusqlite::Error::SqliteFailure(err, _))
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    let existing: i64 = tx
                        .query_row(
                            "SELECT points FROM students WHERE username = ?1",
                            rusqlite::params![username],
                            |r| r.get(0),
                        )
                        .map_err(|e| format!("Failed to load student {}: {}", username, e))?;

                    if existing == *points {
                        summary.unchanged += 1;
                        continue;
                    }
                    tx.execute(
                        "UPDATE students
                         SET points = ?1,
                             updated_at = datetime('now')
                         WHERE username = ?2",
                        rusqlite::params![points, username],
                    )
                    .map_err(|e| format!("Failed to update student {}: {}", username, e))?;
                    log::debug!("Updated {} from {} to {} points", username, existing, points);
                    summary.updated += 1;
                }
                Err(e) => return Err(format!("Failed to insert student {}: {}", username, e)),
            }
        }

        tx.commit()
            .map_err(|e| format!("Failed to commit roster: {}", e))?;
        Ok(summary)
    }

    pub fn list_students(&self) -> Result<Vec<Student>, String> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, username, points FROM students ORDER BY username ASC")
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    points: row.get(2)?,
                })
            })
            .map_err(|e| format!("Failed to query students: {}", e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect students: {}", e))?;
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
        pairs.iter().map(|(n, p)| (n.to_string(), *p)).collect()
    }

    fn points_of(db: &Db, username: &str) -> Option<i64> {
        db.list_students()
            .unwrap()
            .into_iter()
            .find(|s| s.username == username)
            .map(|s| s.points)
    }

    #[test]
    fn test_first_run_inserts_everything() {
        let db = Db::open(":memory:").unwrap();
        let summary = db
            .upsert_scores(&scores(&[("sander", 20), ("bob", 45)]))
            .unwrap();

        assert_eq!(
            summary,
            UpsertSummary {
                inserted: 2,
                updated: 0,
                unchanged: 0
            }
        );
        let names: Vec<String> = db.list_students().unwrap().into_iter().map(|s| s.username).collect();
        assert_eq!(names, vec!["bob", "sander"]);
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let db = Db::open(":memory:").unwrap();
        let roster = scores(&[("sander", 20), ("bob", 45), ("claire", 23)]);
        db.upsert_scores(&roster).unwrap();
        let before = db.list_students().unwrap();

        let summary = db.upsert_scores(&roster).unwrap();

        assert_eq!(summary.unchanged, 3);
        assert_eq!(summary.inserted + summary.updated, 0);
        assert_eq!(db.list_students().unwrap(), before);
    }

    #[test]
    fn test_changed_score_is_overwritten() {
        let db = Db::open(":memory:").unwrap();
        db.upsert_scores(&scores(&[("bob", 45), ("wizard", 60)])).unwrap();
        let bob_id = db.list_students().unwrap()[0].id;

        let summary = db
            .upsert_scores(&scores(&[("bob", 50), ("wizard", 60), ("claire", 23)]))
            .unwrap();

        assert_eq!(
            summary,
            UpsertSummary {
                inserted: 1,
                updated: 1,
                unchanged: 1
            }
        );
        assert_eq!(points_of(&db, "bob"), Some(50));
        assert_eq!(db.list_students().unwrap()[0].id, bob_id);
    }

    #[test]
    fn test_duplicate_names_in_one_batch() {
        let db = Db::open(":memory:").unwrap();
        let summary = db
            .upsert_scores(&scores(&[("bob", 1), ("bob", 2)]))
            .unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(points_of(&db, "bob"), Some(2));
    }

    #[test]
    fn test_reopen_file_keeps_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.db");
        let path = path.to_str().unwrap();

        Db::open(path)
            .unwrap()
            .upsert_scores(&scores(&[("claire", 23)]))
            .unwrap();

        let db = Db::open(path).unwrap();
        assert_eq!(points_of(&db, "claire"), Some(23));
        let summary = db.upsert_scores(&scores(&[("claire", 23)])).unwrap();
        assert_eq!(summary.unchanged, 1);
    }
}
