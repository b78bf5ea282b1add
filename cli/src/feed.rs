//! Paged leaderboard feed.
//!
//! DESIGN
//! ======
//! The feed is a plain state machine: callers ask it for the next request
//! (`refresh` / `load_more`), perform the HTTP call themselves, then hand the
//! outcome back through `apply`. Appended pages are deduplicated by user id,
//! since live rating updates can shift a user across a page boundary
//! between two fetches.

use std::collections::HashSet;

use standings::{LeaderboardPage, RankedUser};

pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// A page fetch the feed is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    /// Append to the current rows instead of replacing them.
    pub append: bool,
}

#[derive(Debug)]
pub struct LeaderboardFeed {
    page_size: u64,
    page: u64,
    users: Vec<RankedUser>,
    seen: HashSet<u64>,
    total_users: u64,
    has_more: bool,
    loading: bool,
    error: Option<String>,
}

impl LeaderboardFeed {
    #[must_use]
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            users: Vec::new(),
            seen: HashSet::new(),
            total_users: 0,
            has_more: true,
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn users(&self) -> &[RankedUser] {
        &self.users
    }

    #[must_use]
    pub fn total_users(&self) -> u64 {
        self.total_users
    }

    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start over from page 1; the result replaces every row.
    pub fn refresh(&mut self) -> PageRequest {
        self.page = 1;
        self.begin(false)
    }

    /// Request the next page, unless a load is in flight or the end was reached.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.page += 1;
        Some(self.begin(true))
    }

    /// Fold a finished fetch into the feed. Returns how many rows were added.
    pub fn apply(&mut self, request: PageRequest, result: Result<LeaderboardPage, String>) -> usize {
        self.loading = false;
        let page = match result {
            Ok(page) => page,
            Err(message) => {
                // Retry the same page on the next `load_more`.
                if request.append {
                    self.page = request.page.saturating_sub(1).max(1);
                }
                self.error = Some(message);
                return 0;
            }
        };

        if !request.append {
            self.users.clear();
            self.seen.clear();
        }
        self.has_more = page.users.len() as u64 == request.page_size;
        self.total_users = page.total_users;

        let before = self.users.len();
        for user in page.users {
            if self.seen.insert(user.id) {
                self.users.push(user);
            }
        }
        self.users.len() - before
    }

    fn begin(&mut self, append: bool) -> PageRequest {
        self.loading = true;
        self.error = None;
        PageRequest { page: self.page, page_size: self.page_size, append }
    }
}

impl Default for LeaderboardFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
