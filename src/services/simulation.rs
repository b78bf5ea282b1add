//! Simulated rating churn.
//!
//! DESIGN
//! ======
//! Each step nudges a small random sample of players by up to ±50 rating so
//! the ranking shifts while clients watch. The same step backs both the
//! `POST /api/simulate-update` endpoint and the periodic background task.

use std::time::Duration;

use rand::Rng;
use rand::seq::index;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use super::leaderboard::Leaderboard;
use crate::state::AppState;

const MIN_UPDATES: usize = 10;
const MAX_UPDATES: usize = 50;
const MAX_DELTA: i64 = 50;

/// Apply one round of random rating changes. Returns how many users changed.
pub fn simulate_updates<R: Rng + ?Sized>(board: &mut Leaderboard, rng: &mut R) -> usize {
    let ids = board.ids();
    if ids.is_empty() {
        return 0;
    }

    let count = rng.random_range(MIN_UPDATES..=MAX_UPDATES).min(ids.len());
    let mut updated = 0;
    for i in index::sample(rng, ids.len(), count) {
        let id = ids[i];
        let Some(current) = board.get(id).map(|u| i64::from(u.rating)) else {
            continue;
        };
        let delta = rng.random_range(-MAX_DELTA..=MAX_DELTA);
        match board.update_rating(id, current + delta) {
            Ok(_) => updated += 1,
            Err(e) => warn!(error = %e, "simulated update skipped"),
        }
    }
    updated
}

/// Spawn the periodic simulation task. Returns `None` when `interval` is zero.
pub fn spawn_simulation_task(state: AppState, interval: Duration) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        info!("rating simulation disabled");
        return None;
    }
    info!(interval_secs = interval.as_secs(), "rating simulation configured");

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let updated = {
                let mut board = state.leaderboard.write().await;
                simulate_updates(&mut board, &mut rand::rng())
            };
            info!(updated, "auto-updated user ratings");
        }
    }))
}

#[cfg(test)]
#[path = "simulation_test.rs"]
mod tests;
