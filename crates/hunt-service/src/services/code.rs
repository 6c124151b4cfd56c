//! Code service
//!
//! Player-facing listing of the codes currently in play.

use std::collections::HashMap;

use hunt_core::Snowflake;
use tracing::instrument;

use crate::dto::CodeWithFoundCount;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Code service
pub struct CodeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CodeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active codes, oldest first, each with the number of players who found it
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<CodeWithFoundCount>> {
        let codes = self.ctx.code_repo().list_active().await?;
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Snowflake> = codes.iter().map(|c| c.id).collect();
        let counts: HashMap<Snowflake, i64> = self
            .ctx
            .claim_repo()
            .count_by_codes(&ids)
            .await?
            .into_iter()
            .collect();

        Ok(codes
            .into_iter()
            .map(|code| CodeWithFoundCount {
                found_count: counts.get(&code.id).copied().unwrap_or(0),
                code,
            })
            .collect())
    }
}
