//! Test fixtures and data generators
//!
//! Provides reusable request bodies, response shapes and setup steps.
//! The database outlives a test run, so generated names carry a per-run tag.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, TestServer, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

fn run_tag() -> &'static str {
    static TAG: OnceLock<String> = OnceLock::new();
    TAG.get_or_init(|| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{:x}", millis % 0xff_ffff_ffff)
    })
}

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!("{}{}", run_tag(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// Requests
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("player{suffix}"),
            email: format!("player{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Create code request
#[derive(Debug, Serialize)]
pub struct CreateCodeRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub points: Option<i32>,
}

impl CreateCodeRequest {
    pub fn unique(points: i32) -> Self {
        let suffix = unique_suffix().to_uppercase();
        Self {
            code: format!("IT{suffix}"),
            name: format!("Spot {suffix}"),
            description: Some("Taped under the bench".to_string()),
            points: Some(points),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: String,
}

/// Admin view of a code
#[derive(Debug, Deserialize)]
pub struct AdminCodeResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub points: i32,
    pub is_active: bool,
    pub found_count: usize,
    pub claimants: Vec<ClaimantResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ClaimantResponse {
    pub user_id: String,
    pub username: String,
    pub claimed_at: String,
}

/// Public view of a code
#[derive(Debug, Deserialize)]
pub struct CodeViewResponse {
    pub id: String,
    pub code: String,
    pub points: i32,
    pub found_count: usize,
    pub claims: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ClaimResponse {
    pub message: String,
    pub claim: FoundCodeResponse,
    pub user_totals: TotalsResponse,
}

#[derive(Debug, Deserialize)]
pub struct FoundCodeResponse {
    pub code_id: String,
    pub code: String,
    pub points: i32,
}

#[derive(Debug, Deserialize)]
pub struct TotalsResponse {
    pub total_found: i64,
    pub total_points: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserStatsResponse {
    pub total_found: i64,
    pub total_points: i64,
    pub rank: u32,
    pub total_players: u32,
    pub found_codes: Vec<FoundCodeResponse>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub total_players: usize,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub total_points: i64,
}

// ============================================================================
// Setup steps
// ============================================================================

/// Register a fresh player and return its session
pub async fn register_player(server: &TestServer) -> Result<AuthResponse> {
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Log in as the bootstrap admin
pub async fn admin_token(server: &TestServer) -> Result<String> {
    let login = LoginRequest {
        email: TEST_ADMIN_EMAIL.to_string(),
        password: TEST_ADMIN_PASSWORD.to_string(),
    };
    let response = server.post("/api/auth/login", &login).await?;
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await?;
    Ok(auth.access_token)
}

/// Create an active code worth `points`
pub async fn create_code(server: &TestServer, admin: &str, points: i32) -> Result<AdminCodeResponse> {
    let response = server
        .post_auth("/api/admin/qr-codes", admin, &CreateCodeRequest::unique(points))
        .await?;
    assert_json(response, StatusCode::CREATED).await
}
