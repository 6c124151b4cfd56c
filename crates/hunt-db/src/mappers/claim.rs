//! Claim model -> entity mappers

use hunt_core::entities::{ClaimDetail, CodeClaimant};
use hunt_core::value_objects::Snowflake;

use crate::models::{ClaimDetailModel, CodeClaimantModel};

impl From<ClaimDetailModel> for ClaimDetail {
    fn from(model: ClaimDetailModel) -> Self {
        ClaimDetail {
            claim_id: Snowflake::new(model.claim_id),
            user_id: Snowflake::new(model.user_id),
            code_id: Snowflake::new(model.code_id),
            code: model.code,
            code_name: model.code_name,
            points: model.points,
            claimed_at: model.claimed_at,
        }
    }
}

impl From<CodeClaimantModel> for CodeClaimant {
    fn from(model: CodeClaimantModel) -> Self {
        CodeClaimant {
            user_id: Snowflake::new(model.user_id),
            username: model.username,
            claimed_at: model.claimed_at,
        }
    }
}
