//! Substring filter applied to entry content at retrieval time.

/// Case-insensitive containment predicate on entry content.
///
/// Folding uses `str::to_lowercase` on both sides, so it covers non-ASCII
/// letters as well (SQLite's `LIKE` only folds ASCII).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Build a filter from a raw query. Only the empty query means "match
    /// all" and yields `None`; whitespace is matched like any other text.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    pub fn query(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, content: &str) -> bool {
        content.to_lowercase().contains(&self.needle)
    }
}

/// Apply an optional filter; `None` matches everything.
pub fn matches(filter: Option<&SearchFilter>, content: &str) -> bool {
    filter.is_none_or(|f| f.matches(content))
}
