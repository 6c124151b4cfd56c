//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfileResponse,
}

/// The signed-in user's own profile
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Code Responses
// ============================================================================

/// Public view of one claim on a code; no claimant details beyond the id
#[derive(Debug, Clone, Serialize)]
pub struct CodeClaimResponse {
    pub user_id: String,
    pub claimed_at: DateTime<Utc>,
}

/// `GET /qr/:code`
#[derive(Debug, Clone, Serialize)]
pub struct CodeViewResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub points: i32,
    pub found_count: usize,
    pub claims: Vec<CodeClaimResponse>,
}

/// Entry of `GET /qr/all`
#[derive(Debug, Clone, Serialize)]
pub struct ActiveCodeResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub points: i32,
    pub found_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ActiveCodesResponse {
    pub codes: Vec<ActiveCodeResponse>,
}

// ============================================================================
// Claim Responses
// ============================================================================

/// One entry of a user's claim history
#[derive(Debug, Clone, Serialize)]
pub struct FoundCodeResponse {
    pub claim_id: String,
    pub code_id: String,
    pub code: String,
    pub code_name: String,
    pub points: i32,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserTotalsResponse {
    pub total_found: i64,
    pub total_points: i64,
}

/// `POST /qr/:code/claim`
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub message: String,
    pub claim: FoundCodeResponse,
    pub user_totals: UserTotalsResponse,
}

// ============================================================================
// Player Responses
// ============================================================================

/// `GET /user/stats`
#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub user: UserProfileResponse,
    pub total_found: i64,
    pub total_points: i64,
    pub rank: u32,
    pub total_players: u32,
    pub total_active_codes: i64,
    /// Newest first
    pub found_codes: Vec<FoundCodeResponse>,
}

#[derive(Debug, Serialize)]
pub struct FoundCodesResponse {
    pub found_codes: Vec<FoundCodeResponse>,
}

// ============================================================================
// Leaderboard Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardCodeResponse {
    pub code_name: String,
    pub points: i32,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryResponse {
    pub rank: u32,
    pub user_id: String,
    pub username: String,
    pub total_found: i64,
    pub total_points: i64,
    pub found_codes: Vec<LeaderboardCodeResponse>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntryResponse>,
    pub total_players: usize,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Admin Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AdminStatsResponse {
    pub total_users: i64,
    pub total_codes: i64,
    pub active_codes: i64,
    pub total_claims: i64,
    pub unclaimed_active_codes: i64,
    pub claims_today: i64,
    pub top_users: Vec<LeaderboardEntryResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub total_found: i64,
    pub total_points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeClaimantResponse {
    pub user_id: String,
    pub username: String,
    pub claimed_at: DateTime<Utc>,
}

/// Admin view of a code, active or not
#[derive(Debug, Clone, Serialize)]
pub struct AdminCodeResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub points: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub found_count: usize,
    pub claimants: Vec<CodeClaimantResponse>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(version: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
