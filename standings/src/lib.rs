//! Shared leaderboard wire model for the HTTP API.
//!
//! This crate owns the JSON representation used by both the `leaderboard`
//! server and the `cli` client. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Lowest rating a user can hold.
pub const MIN_RATING: u32 = 100;
/// Highest rating a user can hold.
pub const MAX_RATING: u32 = 5000;

/// Endpoint paths, relative to the server's base URL.
pub mod endpoints {
    pub const LEADERBOARD: &str = "/api/leaderboard";
    pub const SEARCH: &str = "/api/search";
    pub const SIMULATE_UPDATE: &str = "/api/simulate-update";
    pub const HEALTH: &str = "/api/health";
}

/// Clamp an arbitrary rating into `[MIN_RATING, MAX_RATING]`.
#[must_use]
pub fn clamp_rating(rating: i64) -> u32 {
    let clamped = rating.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING));
    // In range by construction.
    u32::try_from(clamped).unwrap_or(MIN_RATING)
}

// =============================================================================
// USERS
// =============================================================================

/// A player as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub rating: u32,
}

/// A player annotated with their global competition rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    pub global_rank: u64,
    pub id: u64,
    pub username: String,
    pub rating: u32,
}

impl RankedUser {
    #[must_use]
    pub fn new(user: &User, global_rank: u64) -> Self {
        Self { global_rank, id: user.id, username: user.username.clone(), rating: user.rating }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// `GET /api/leaderboard` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub users: Vec<RankedUser>,
    pub total_users: u64,
    pub page: u64,
    pub page_size: u64,
}

/// `GET /api/search` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub users: Vec<RankedUser>,
    pub count: u64,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub total_users: u64,
    pub timestamp: String,
}

/// `POST /api/simulate-update` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateReport {
    pub message: String,
    pub users_updated: u64,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
