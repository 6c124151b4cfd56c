//! Admin handlers
//!
//! Every endpoint here requires an admin caller.

use axum::{extract::State, Json};
use hunt_service::dto::{
    AdminCodeResponse, AdminStatsResponse, AdminUserResponse, CreateCodeRequest,
    UpdateCodeRequest,
};
use hunt_service::AdminService;

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<AdminStatsResponse>> {
    let stats = AdminService::new(state.service_context()).stats().await?;
    Ok(Json(AdminStatsResponse::from(&stats)))
}

/// Every account with its totals, newest first
///
/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<AdminUserResponse>>> {
    let users = AdminService::new(state.service_context()).list_users().await?;
    Ok(Json(users.iter().map(AdminUserResponse::from).collect()))
}

/// Delete an account and its claims
///
/// DELETE /api/admin/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<NoContent> {
    AdminService::new(state.service_context())
        .delete_user(admin.user_id, user_id)
        .await?;
    tracing::info!(admin_id = %admin.user_id, user_id = %user_id, "User deleted by admin");
    Ok(NoContent)
}

/// Every code, active or not, with claimants
///
/// GET /api/admin/qr-codes
pub async fn list_codes(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<AdminCodeResponse>>> {
    let codes = AdminService::new(state.service_context()).list_codes().await?;
    Ok(Json(codes.iter().map(AdminCodeResponse::from).collect()))
}

/// POST /api/admin/qr-codes
pub async fn create_code(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateCodeRequest>,
) -> ApiResult<Created<Json<AdminCodeResponse>>> {
    let view = AdminService::new(state.service_context())
        .create_code(request)
        .await?;
    Ok(Created(Json(AdminCodeResponse::from(&view))))
}

/// PUT /api/admin/qr-codes/:code_id
pub async fn update_code(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(code_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCodeRequest>,
) -> ApiResult<Json<AdminCodeResponse>> {
    let view = AdminService::new(state.service_context())
        .update_code(code_id, request)
        .await?;
    Ok(Json(AdminCodeResponse::from(&view)))
}

/// Flip whether a code can be claimed
///
/// PATCH /api/admin/qr-codes/:code_id/toggle-active
pub async fn toggle_code(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(code_id): IdPath,
) -> ApiResult<Json<AdminCodeResponse>> {
    let view = AdminService::new(state.service_context())
        .toggle_code(code_id)
        .await?;
    Ok(Json(AdminCodeResponse::from(&view)))
}

/// Delete a code and every claim on it
///
/// DELETE /api/admin/qr-codes/:code_id
pub async fn delete_code(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(code_id): IdPath,
) -> ApiResult<NoContent> {
    AdminService::new(state.service_context())
        .delete_code(code_id)
        .await?;
    Ok(NoContent)
}
