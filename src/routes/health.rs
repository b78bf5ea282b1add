//! Health check route.

use axum::extract::State;
use axum::response::Json;
use standings::HealthReport;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::ApiError;
use crate::state::AppState;

/// `GET /api/health` — liveness plus the current roster size.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthReport>, ApiError> {
    let total_users = state.leaderboard.read().await.len() as u64;
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(HealthReport { status: "healthy".to_owned(), total_users, timestamp }))
}
