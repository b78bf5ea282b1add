//! Leaderboard, search, and simulation routes.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use standings::{LeaderboardPage, SearchResults, SimulateReport};
use tracing::info;

use super::ApiError;
use crate::config::PagingConfig;
use crate::services::simulation::simulate_updates;
use crate::state::AppState;

/// Raw paging parameters. Kept as strings so malformed values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub username: Option<String>,
}

/// `GET /api/leaderboard?page=&size=` — one page of the global ranking.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<LeaderboardPage> {
    let page = normalise_page(params.page.as_deref());
    let size = normalise_size(params.size.as_deref(), state.paging);

    let board = state.leaderboard.read().await;
    Json(board.page(page, size))
}

/// `GET /api/search?username=` — substring search with live global ranks.
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let query = params.username.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::BadRequest("username query parameter is required"));
    }

    let board = state.leaderboard.read().await;
    Ok(Json(board.search(query)))
}

/// `POST /api/simulate-update` — run one round of random rating changes.
pub async fn simulate_update(State(state): State<AppState>) -> Json<SimulateReport> {
    let updated = {
        let mut board = state.leaderboard.write().await;
        simulate_updates(&mut board, &mut rand::rng())
    };
    info!(updated, "simulated rating update");

    Json(SimulateReport { message: "Scores updated successfully".to_owned(), users_updated: updated as u64 })
}

pub(crate) fn normalise_page(raw: Option<&str>) -> u64 {
    parse_positive(raw).unwrap_or(1)
}

pub(crate) fn normalise_size(raw: Option<&str>, paging: PagingConfig) -> u64 {
    parse_positive(raw).map_or(paging.default_size, |size| size.min(paging.max_size))
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|&n| n >= 1)
}

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod tests;
