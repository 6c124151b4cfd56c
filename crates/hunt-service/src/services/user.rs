//! User service
//!
//! A player's own progress: totals, rank and claim history.

use hunt_core::entities::ClaimDetail;
use hunt_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::UserStats;

use super::claim::ClaimService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self, user_id: Snowflake) -> ServiceResult<UserStats> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let rank = ClaimService::new(self.ctx).compute_user_rank(user_id).await?;
        let total_active_codes = self.ctx.code_repo().count_active().await?;
        let history = self.ctx.claim_repo().find_by_user(user_id).await?;

        Ok(UserStats {
            user,
            rank,
            total_active_codes,
            history,
        })
    }

    /// Claim history, newest first
    #[instrument(skip(self))]
    pub async fn found_codes(&self, user_id: Snowflake) -> ServiceResult<Vec<ClaimDetail>> {
        Ok(self.ctx.claim_repo().find_by_user(user_id).await?)
    }
}
