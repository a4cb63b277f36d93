use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub clear_screen: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("JOURNAL_DB_PATH")
                .unwrap_or_else(|_| "./journal.db".to_string()),
            clear_screen: env::var("JOURNAL_CLEAR_SCREEN")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

/// `0`, `false`, `no` and `off` (any case) disable; anything else enables.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
