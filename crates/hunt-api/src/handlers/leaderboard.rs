//! Leaderboard handler

use axum::{extract::State, Json};
use chrono::Utc;
use hunt_service::dto::{LeaderboardEntryResponse, LeaderboardResponse};
use hunt_service::ClaimService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Every player, ranked
///
/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> ApiResult<Json<LeaderboardResponse>> {
    let ranked = ClaimService::new(state.service_context())
        .compute_leaderboard()
        .await?;

    Ok(Json(LeaderboardResponse {
        total_players: ranked.len(),
        leaderboard: ranked.iter().map(LeaderboardEntryResponse::from).collect(),
        last_updated: Utc::now(),
    }))
}
