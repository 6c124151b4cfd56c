//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities, and from the composite
//! results the services return, to response DTOs.

use hunt_common::IssuedToken;
use hunt_core::entities::{ClaimDetail, Code, CodeClaimant, RankInfo, RankedUser, User, UserTotals};

use super::responses::{
    ActiveCodeResponse, AdminCodeResponse, AdminStatsResponse, AdminUserResponse, AuthResponse,
    ClaimResponse, CodeClaimResponse, CodeClaimantResponse, CodeViewResponse, FoundCodeResponse,
    LeaderboardCodeResponse, LeaderboardEntryResponse, UserProfileResponse, UserStatsResponse,
    UserTotalsResponse,
};

// ============================================================================
// Composite results
// ============================================================================

/// A code together with everyone who claimed it, oldest claim first
#[derive(Debug, Clone)]
pub struct CodeView {
    pub code: Code,
    pub claimants: Vec<CodeClaimant>,
}

/// A successful claim and the claimant's recomputed totals
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub claim: ClaimDetail,
    pub totals: UserTotals,
}

/// An active code and how many players have found it
#[derive(Debug, Clone)]
pub struct CodeWithFoundCount {
    pub code: Code,
    pub found_count: i64,
}

/// Everything the player stats page shows
#[derive(Debug, Clone)]
pub struct UserStats {
    pub user: User,
    pub rank: RankInfo,
    pub total_active_codes: i64,
    /// Newest first
    pub history: Vec<ClaimDetail>,
}

#[derive(Debug, Clone)]
pub struct UserWithTotals {
    pub user: User,
    pub totals: UserTotals,
}

#[derive(Debug, Clone)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_codes: i64,
    pub active_codes: i64,
    pub total_claims: i64,
    pub unclaimed_active_codes: i64,
    pub claims_today: i64,
    pub top_users: Vec<RankedUser>,
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

impl AuthResponse {
    pub fn new(token: IssuedToken, user: &User) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserProfileResponse::from(user),
        }
    }
}

impl From<&UserTotals> for UserTotalsResponse {
    fn from(totals: &UserTotals) -> Self {
        Self {
            total_found: totals.total_found,
            total_points: totals.total_points,
        }
    }
}

// ============================================================================
// Code Mappers
// ============================================================================

impl From<&CodeView> for CodeViewResponse {
    fn from(view: &CodeView) -> Self {
        Self {
            id: view.code.id.to_string(),
            code: view.code.code.clone(),
            name: view.code.name.clone(),
            description: view.code.description.clone(),
            points: view.code.points,
            found_count: view.claimants.len(),
            claims: view
                .claimants
                .iter()
                .map(|c| CodeClaimResponse {
                    user_id: c.user_id.to_string(),
                    claimed_at: c.claimed_at,
                })
                .collect(),
        }
    }
}

impl From<&CodeWithFoundCount> for ActiveCodeResponse {
    fn from(entry: &CodeWithFoundCount) -> Self {
        Self {
            id: entry.code.id.to_string(),
            code: entry.code.code.clone(),
            name: entry.code.name.clone(),
            description: entry.code.description.clone(),
            points: entry.code.points,
            found_count: entry.found_count,
            created_at: entry.code.created_at,
        }
    }
}

impl From<&CodeClaimant> for CodeClaimantResponse {
    fn from(claimant: &CodeClaimant) -> Self {
        Self {
            user_id: claimant.user_id.to_string(),
            username: claimant.username.clone(),
            claimed_at: claimant.claimed_at,
        }
    }
}

impl From<&CodeView> for AdminCodeResponse {
    fn from(view: &CodeView) -> Self {
        let code = &view.code;
        Self {
            id: code.id.to_string(),
            code: code.code.clone(),
            name: code.name.clone(),
            description: code.description.clone(),
            points: code.points,
            is_active: code.is_active,
            created_at: code.created_at,
            updated_at: code.updated_at,
            found_count: view.claimants.len(),
            claimants: view.claimants.iter().map(CodeClaimantResponse::from).collect(),
        }
    }
}

// ============================================================================
// Claim Mappers
// ============================================================================

impl From<&ClaimDetail> for FoundCodeResponse {
    fn from(claim: &ClaimDetail) -> Self {
        Self {
            claim_id: claim.claim_id.to_string(),
            code_id: claim.code_id.to_string(),
            code: claim.code.clone(),
            code_name: claim.code_name.clone(),
            points: claim.points,
            claimed_at: claim.claimed_at,
        }
    }
}

impl From<&ClaimOutcome> for ClaimResponse {
    fn from(outcome: &ClaimOutcome) -> Self {
        Self {
            message: format!("Found {}!", outcome.claim.code_name),
            claim: FoundCodeResponse::from(&outcome.claim),
            user_totals: UserTotalsResponse::from(&outcome.totals),
        }
    }
}

impl From<&UserStats> for UserStatsResponse {
    fn from(stats: &UserStats) -> Self {
        Self {
            user: UserProfileResponse::from(&stats.user),
            total_found: stats.rank.totals.total_found,
            total_points: stats.rank.totals.total_points,
            rank: stats.rank.rank,
            total_players: stats.rank.total_players,
            total_active_codes: stats.total_active_codes,
            found_codes: stats.history.iter().map(FoundCodeResponse::from).collect(),
        }
    }
}

// ============================================================================
// Leaderboard Mappers
// ============================================================================

impl From<&RankedUser> for LeaderboardEntryResponse {
    fn from(ranked: &RankedUser) -> Self {
        Self {
            rank: ranked.rank,
            user_id: ranked.user.id.to_string(),
            username: ranked.user.username.clone(),
            total_found: ranked.totals.total_found,
            total_points: ranked.totals.total_points,
            found_codes: ranked
                .claims
                .iter()
                .map(|c| LeaderboardCodeResponse {
                    code_name: c.code_name.clone(),
                    points: c.points,
                    claimed_at: c.claimed_at,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<&UserWithTotals> for AdminUserResponse {
    fn from(row: &UserWithTotals) -> Self {
        Self {
            id: row.user.id.to_string(),
            username: row.user.username.clone(),
            email: row.user.email.clone(),
            is_admin: row.user.is_admin,
            created_at: row.user.created_at,
            total_found: row.totals.total_found,
            total_points: row.totals.total_points,
        }
    }
}

impl From<&AdminStats> for AdminStatsResponse {
    fn from(stats: &AdminStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_codes: stats.total_codes,
            active_codes: stats.active_codes,
            total_claims: stats.total_claims,
            unclaimed_active_codes: stats.unclaimed_active_codes,
            claims_today: stats.claims_today,
            top_users: stats
                .top_users
                .iter()
                .map(LeaderboardEntryResponse::from)
                .collect(),
        }
    }
}
