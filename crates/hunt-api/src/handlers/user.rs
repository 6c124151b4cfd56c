//! Player handlers

use axum::{extract::State, Json};
use hunt_service::dto::{FoundCodeResponse, FoundCodesResponse, UserStatsResponse};
use hunt_service::UserService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Totals, rank and history of the caller
///
/// GET /api/user/stats
pub async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatsResponse>> {
    let stats = UserService::new(state.service_context())
        .stats(auth.user_id)
        .await?;
    Ok(Json(UserStatsResponse::from(&stats)))
}

/// GET /api/user/found-codes
pub async fn get_found_codes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<FoundCodesResponse>> {
    let history = UserService::new(state.service_context())
        .found_codes(auth.user_id)
        .await?;
    Ok(Json(FoundCodesResponse {
        found_codes: history.iter().map(FoundCodeResponse::from).collect(),
    }))
}
