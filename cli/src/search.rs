//! Debounced player search.
//!
//! DESIGN
//! ======
//! Keystrokes (here: stdin lines) flow through `Debounced`, which only
//! releases a query once input has been quiet for the debounce delay. The
//! released query is folded into `SearchView`, which mirrors what the search
//! screen shows: the results, whether a search has happened, and any error.

use std::time::Duration;

use standings::{RankedUser, SearchResults};
use tokio::sync::mpsc;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

// =============================================================================
// DEBOUNCER
// =============================================================================

/// Yields the newest value once no newer one arrives within `delay`.
pub struct Debounced<T> {
    rx: mpsc::Receiver<T>,
    delay: Duration,
}

impl<T> Debounced<T> {
    #[must_use]
    pub fn new(rx: mpsc::Receiver<T>, delay: Duration) -> Self {
        Self { rx, delay }
    }

    /// Next settled value. A pending value is flushed when the input closes;
    /// `None` means the input closed with nothing pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut pending = self.rx.recv().await?;
        loop {
            tokio::select! {
                newer = self.rx.recv() => match newer {
                    Some(value) => pending = value,
                    None => return Some(pending),
                },
                () = tokio::time::sleep(self.delay) => return Some(pending),
            }
        }
    }
}

// =============================================================================
// SEARCH VIEW
// =============================================================================

#[derive(Debug, Default)]
pub struct SearchView {
    query: String,
    results: Vec<RankedUser>,
    has_searched: bool,
    error: Option<String>,
}

impl SearchView {
    #[cfg(test)]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[RankedUser] {
        &self.results
    }

    #[cfg(test)]
    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a new query. Returns the trimmed text to search for, or `None`
    /// when the query is blank and the view was cleared instead.
    pub fn submit(&mut self, query: &str) -> Option<String> {
        self.query = query.to_owned();
        self.error = None;
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.results.clear();
            self.has_searched = false;
            return None;
        }
        self.has_searched = true;
        Some(trimmed.to_owned())
    }

    pub fn apply(&mut self, result: Result<SearchResults, String>) {
        match result {
            Ok(found) => self.results = found.users,
            Err(message) => {
                self.results.clear();
                self.error = Some(message);
            }
        }
    }

    /// One-line status shown above the results.
    #[must_use]
    pub fn summary(&self) -> String {
        if let Some(error) = &self.error {
            return format!("! {error}");
        }
        if !self.has_searched {
            return "Start typing to search for players".to_owned();
        }
        match self.results.len() {
            0 => format!("No players found matching \"{}\"", self.query.trim()),
            1 => "Found 1 player".to_owned(),
            n => format!("Found {n} players"),
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
