//! Claim service
//!
//! The claim write path and the standings read path. Nothing here caches:
//! every call recomputes from the store.

use hunt_core::entities::{rank_users, Claim, ClaimDetail, RankInfo, RankedUser, UserTotals};
use hunt_core::{DomainError, Snowflake};
use tracing::{debug, info, instrument};

use crate::dto::{ClaimOutcome, CodeView};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Claim service
pub struct ClaimService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClaimService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up a code by its scanned string, case-insensitively.
    ///
    /// Fails with `CodeNotFound` for an unknown string and `CodeInactive` for a
    /// code that is switched off.
    #[instrument(skip(self))]
    pub async fn resolve_code(&self, code: &str) -> ServiceResult<CodeView> {
        let code = self.find_claimable(code).await?;
        let claimants = self.ctx.claim_repo().find_claimants(code.id).await?;

        Ok(CodeView { code, claimants })
    }

    /// Record that `user_id` found `code`.
    ///
    /// The store's (user, code) constraint decides races: of two concurrent
    /// attempts exactly one inserts and the other gets `AlreadyClaimed`.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn claim(&self, user_id: Snowflake, code: &str) -> ServiceResult<ClaimOutcome> {
        let code = self.find_claimable(code).await?;
        let claim = Claim::new(self.ctx.generate_id(), user_id, code.id);

        if let Err(e) = self.ctx.claim_repo().insert(&claim).await {
            if matches!(e, DomainError::AlreadyClaimed) {
                debug!(code = %code.code, "Code already claimed by this user");
            }
            return Err(e.into());
        }

        let history = self.ctx.claim_repo().find_by_user(user_id).await?;
        let totals = UserTotals::from_claims(&history);

        info!(
            code = %code.code,
            points = code.points,
            total_points = totals.total_points,
            "Code claimed"
        );

        Ok(ClaimOutcome {
            claim: ClaimDetail {
                claim_id: claim.id,
                user_id,
                code_id: code.id,
                code: code.code,
                code_name: code.name,
                points: code.points,
                claimed_at: claim.claimed_at,
            },
            totals,
        })
    }

    /// Every user ranked by total points, from one store snapshot
    #[instrument(skip(self))]
    pub async fn compute_leaderboard(&self) -> ServiceResult<Vec<RankedUser>> {
        let users = self.ctx.claim_repo().list_users_with_claims().await?;
        Ok(rank_users(users))
    }

    /// One user's place on the leaderboard plus the number of players
    #[instrument(skip(self))]
    pub async fn compute_user_rank(&self, user_id: Snowflake) -> ServiceResult<RankInfo> {
        let board = self.compute_leaderboard().await?;
        RankInfo::locate(&board, user_id).ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn find_claimable(&self, code: &str) -> ServiceResult<hunt_core::Code> {
        let wanted = code.trim();
        let found = self
            .ctx
            .code_repo()
            .find_by_code(wanted)
            .await?
            .ok_or_else(|| DomainError::CodeNotFound(wanted.to_string()))?;

        found.ensure_claimable()?;
        Ok(found)
    }
}
