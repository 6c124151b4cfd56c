//! Code handlers
//!
//! Endpoints players hit after scanning: resolve a code, claim it, and list
//! what is currently in play.

use axum::{
    extract::{Path, State},
    Json,
};
use hunt_service::dto::{ActiveCodeResponse, ActiveCodesResponse, ClaimResponse, CodeViewResponse};
use hunt_service::{ClaimService, CodeService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List active codes with their found counts, oldest first
///
/// GET /api/qr/all
pub async fn list_active_codes(State(state): State<AppState>) -> ApiResult<Json<ActiveCodesResponse>> {
    let codes = CodeService::new(state.service_context()).list_active().await?;
    Ok(Json(ActiveCodesResponse {
        codes: codes.iter().map(ActiveCodeResponse::from).collect(),
    }))
}

/// Resolve a scanned code string
///
/// GET /api/qr/:code
pub async fn resolve_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<CodeViewResponse>> {
    let view = ClaimService::new(state.service_context())
        .resolve_code(&code)
        .await?;
    Ok(Json(CodeViewResponse::from(&view)))
}

/// Claim a code for the caller
///
/// POST /api/qr/:code/claim
pub async fn claim_code(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(code): Path<String>,
) -> ApiResult<Json<ClaimResponse>> {
    let outcome = ClaimService::new(state.service_context())
        .claim(auth.user_id, &code)
        .await?;
    Ok(Json(ClaimResponse::from(&outcome)))
}
