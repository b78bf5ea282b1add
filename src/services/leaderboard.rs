//! In-memory leaderboard store.
//!
//! DESIGN
//! ======
//! Three structures are kept in lockstep on every write:
//! - `users`: id -> entry (user plus lowercased username for search)
//! - `order`: `BTreeSet<Standing>` sorted rating desc, id asc
//! - `histogram`: rating counts for rank and position queries
//!
//! Ranks use standard competition ranking: a user's rank is one plus the
//! number of users rated strictly higher, so ties share a rank and the rank
//! does not depend on which page the user lands on.
//!
//! Paging seeks straight to the first rating of the requested page via the
//! histogram, then walks the ordered index from there.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use standings::{LeaderboardPage, RankedUser, SearchResults, User, clamp_rating};

use super::histogram::RatingHistogram;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("unknown user: {0}")]
    UnknownUser(u64),
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Ordered-index key. Field order gives rating desc, then id asc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Standing {
    rating: Reverse<u32>,
    id: u64,
}

impl Standing {
    fn of(user: &User) -> Self {
        Self { rating: Reverse(user.rating), id: user.id }
    }
}

struct Entry {
    user: User,
    /// Lowercased username, cached for case-insensitive search.
    name_key: String,
}

// =============================================================================
// LEADERBOARD
// =============================================================================

pub struct Leaderboard {
    users: HashMap<u64, Entry>,
    order: BTreeSet<Standing>,
    histogram: RatingHistogram,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self { users: HashMap::new(), order: BTreeSet::new(), histogram: RatingHistogram::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.get(&id).map(|e| &e.user)
    }

    /// All user ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.users.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Insert or replace a user. The rating is clamped into range.
    pub fn add_user(&mut self, mut user: User) {
        user.rating = clamp_rating(i64::from(user.rating));
        if let Some(old) = self.users.remove(&user.id) {
            self.unindex(&old.user);
        }
        self.index(&user);
        let name_key = user.username.to_lowercase();
        self.users.insert(user.id, Entry { user, name_key });
    }

    /// Set a user's rating (clamped) and re-index them.
    pub fn update_rating(&mut self, id: u64, new_rating: i64) -> Result<User, LeaderboardError> {
        let old = self
            .users
            .get(&id)
            .map(|e| e.user.clone())
            .ok_or(LeaderboardError::UnknownUser(id))?;
        self.unindex(&old);

        let updated = User { rating: clamp_rating(new_rating), ..old };
        self.index(&updated);
        if let Some(entry) = self.users.get_mut(&id) {
            entry.user.rating = updated.rating;
        }
        Ok(updated)
    }

    /// Competition rank of a rating: one plus the count of strictly higher ratings.
    #[must_use]
    pub fn rank_of(&self, rating: u32) -> u64 {
        self.histogram.above(rating) + 1
    }

    /// One page of the ranking. `page` is 1-based; callers normalise inputs.
    #[must_use]
    pub fn page(&self, page: u64, page_size: u64) -> LeaderboardPage {
        let total_users = self.histogram.total();
        let start = page.saturating_sub(1).saturating_mul(page_size);

        let users = match self.histogram.rating_at_position(start) {
            Some(first_rating) => {
                // Users before `start` that share `first_rating` still sit in
                // the range walked below.
                let skip = start - self.histogram.above(first_rating);
                let from = Standing { rating: Reverse(first_rating), id: 0 };
                self.order
                    .range(from..)
                    .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                    .take(usize::try_from(page_size).unwrap_or(usize::MAX))
                    .filter_map(|s| self.users.get(&s.id))
                    .map(|e| RankedUser::new(&e.user, self.rank_of(e.user.rating)))
                    .collect()
            }
            None => Vec::new(),
        };

        LeaderboardPage { users, total_users, page, page_size }
    }

    /// Case-insensitive substring search, best rating first.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let mut matched: Vec<&User> = self
            .users
            .values()
            .filter(|e| e.name_key.contains(&needle))
            .map(|e| &e.user)
            .collect();
        matched.sort_unstable_by_key(|u| Standing::of(u));

        let users: Vec<RankedUser> = matched
            .into_iter()
            .map(|u| RankedUser::new(u, self.rank_of(u.rating)))
            .collect();
        SearchResults { count: users.len() as u64, users }
    }

    fn index(&mut self, user: &User) {
        self.order.insert(Standing::of(user));
        self.histogram.insert(user.rating);
    }

    fn unindex(&mut self, user: &User) {
        if self.order.remove(&Standing::of(user)) {
            self.histogram.remove(user.rating);
        }
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod tests;
