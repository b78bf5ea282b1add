//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the single in-memory leaderboard behind a tokio `RwLock`:
//! page and search requests take read locks, rating updates take the write
//! lock only for the duration of the in-memory mutation.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::PagingConfig;
use crate::services::leaderboard::Leaderboard;

/// Shared application state. Clone is required by Axum; fields are Arc or Copy.
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: Arc<RwLock<Leaderboard>>,
    pub paging: PagingConfig,
}

impl AppState {
    #[must_use]
    pub fn new(leaderboard: Leaderboard, paging: PagingConfig) -> Self {
        Self { leaderboard: Arc::new(RwLock::new(leaderboard)), paging }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
