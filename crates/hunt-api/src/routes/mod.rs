//! Route definitions
//!
//! All routes are mounted under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{admin, auth, health, leaderboard, qr, user};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(qr_routes())
        .merge(user_routes())
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .nest("/admin", admin_routes())
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Code routes
///
/// `/qr/all` is a static segment and wins over `/qr/:code`.
fn qr_routes() -> Router<AppState> {
    Router::new()
        .route("/qr/all", get(qr::list_active_codes))
        .route("/qr/:code", get(qr::resolve_code))
        .route("/qr/:code/claim", post(qr::claim_code))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/stats", get(user::get_stats))
        .route("/user/found-codes", get(user::get_found_codes))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::get_stats))
        .route("/users", get(admin::list_users))
        .route("/users/:user_id", delete(admin::delete_user))
        .route("/qr-codes", get(admin::list_codes).post(admin::create_code))
        .route(
            "/qr-codes/:code_id",
            put(admin::update_code).delete(admin::delete_code),
        )
        .route("/qr-codes/:code_id/toggle-active", patch(admin::toggle_code))
}
