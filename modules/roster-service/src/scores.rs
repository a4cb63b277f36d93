//! Where the roster mapping comes from.

use std::collections::BTreeMap;

/// The roster reconciled when no scores file is configured.
pub fn default_roster() -> Vec<(String, i64)> {
    [("sander", 20), ("bob", 45), ("claire", 23), ("wizard", 60)]
        .into_iter()
        .map(|(name, points)| (name.to_string(), points))
        .collect()
}

/// Parse a JSON object of `{"name": points}`. Names come back sorted.
pub fn parse(json: &str) -> Result<Vec<(String, i64)>, String> {
    let map: BTreeMap<String, i64> =
        serde_json::from_str(json).map_err(|e| format!("Invalid scores JSON: {}", e))?;
    Ok(map.into_iter().collect())
}

pub fn load_file(path: &str) -> Result<Vec<(String, i64)>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scores file {}: {}", path, e))?;
    parse(&json)
}
