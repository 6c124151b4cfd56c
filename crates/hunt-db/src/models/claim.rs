//! Claim database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A claims row joined to its code
#[derive(Debug, Clone, FromRow)]
pub struct ClaimDetailModel {
    pub claim_id: i64,
    pub user_id: i64,
    pub code_id: i64,
    pub code: String,
    pub code_name: String,
    pub points: i32,
    pub claimed_at: DateTime<Utc>,
}

/// A claims row joined to its user
#[derive(Debug, Clone, FromRow)]
pub struct CodeClaimantModel {
    pub user_id: i64,
    pub username: String,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CodeClaimCountModel {
    pub code_id: i64,
    pub claim_count: i64,
}
