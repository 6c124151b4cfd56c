//! Claim entity - the record that a user found a code

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// One user's claim on one code. The store keeps at most one per (user, code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub code_id: Snowflake,
    pub claimed_at: DateTime<Utc>,
}

impl Claim {
    pub fn new(id: Snowflake, user_id: Snowflake, code_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            code_id,
            claimed_at: super::now(),
        }
    }
}

/// A claim joined to the code it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDetail {
    pub claim_id: Snowflake,
    pub user_id: Snowflake,
    pub code_id: Snowflake,
    pub code: String,
    pub code_name: String,
    pub points: i32,
    pub claimed_at: DateTime<Utc>,
}

/// Who claimed a given code, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeClaimant {
    pub user_id: Snowflake,
    pub username: String,
    pub claimed_at: DateTime<Utc>,
}
