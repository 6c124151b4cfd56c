//! Admin service
//!
//! Statistics, user management and code management. Callers reach these only
//! after `AdminService::ensure_admin` accepted the acting user.

use chrono::{NaiveTime, TimeZone, Utc};
use hunt_core::entities::{Code, CodeUpdate, User, UserTotals};
use hunt_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{AdminStats, CodeView, CreateCodeRequest, UpdateCodeRequest, UserWithTotals};

use super::claim::ClaimService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of leading players shown on the admin dashboard
pub const TOP_USERS: usize = 5;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fails with `PermissionDenied` unless the user holds the admin flag
    pub fn ensure_admin(user: &User, action: &str) -> ServiceResult<()> {
        if user.is_admin {
            Ok(())
        } else {
            warn!(user_id = %user.id, action, "Admin action refused");
            Err(ServiceError::permission_denied(action))
        }
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<AdminStats> {
        let midnight = Utc.from_utc_datetime(&Utc::now().date_naive().and_time(NaiveTime::default()));

        let mut top_users = ClaimService::new(self.ctx).compute_leaderboard().await?;
        top_users.truncate(TOP_USERS);

        Ok(AdminStats {
            total_users: self.ctx.user_repo().count().await?,
            total_codes: self.ctx.code_repo().count().await?,
            active_codes: self.ctx.code_repo().count_active().await?,
            total_claims: self.ctx.claim_repo().count().await?,
            unclaimed_active_codes: self.ctx.code_repo().count_unclaimed_active().await?,
            claims_today: self.ctx.claim_repo().count_since(midnight).await?,
            top_users,
        })
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Every user with their totals, newest account first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserWithTotals>> {
        let mut rows: Vec<UserWithTotals> = self
            .ctx
            .claim_repo()
            .list_users_with_claims()
            .await?
            .into_iter()
            .map(|entry| UserWithTotals {
                totals: UserTotals::from_claims(&entry.claims),
                user: entry.user,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.user
                .created_at
                .cmp(&a.user.created_at)
                .then(b.user.id.cmp(&a.user.id))
        });
        Ok(rows)
    }

    /// Delete a user and their claims. An admin cannot delete themselves.
    #[instrument(skip(self), fields(actor = %actor))]
    pub async fn delete_user(&self, actor: Snowflake, target: Snowflake) -> ServiceResult<()> {
        if actor == target {
            return Err(DomainError::CannotDeleteSelf.into());
        }

        self.ctx.user_repo().delete(target).await?;
        info!(user_id = %target, "User deleted");
        Ok(())
    }

    // ========================================================================
    // Codes
    // ========================================================================

    /// Every code, active or not, newest first, with its claimants
    #[instrument(skip(self))]
    pub async fn list_codes(&self) -> ServiceResult<Vec<CodeView>> {
        let codes = self.ctx.code_repo().list_all().await?;

        let mut views = Vec::with_capacity(codes.len());
        for code in codes {
            let claimants = self.ctx.claim_repo().find_claimants(code.id).await?;
            views.push(CodeView { code, claimants });
        }
        Ok(views)
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_code(&self, request: CreateCodeRequest) -> ServiceResult<CodeView> {
        request.validate()?;

        let mut code = Code::new(
            self.ctx.generate_id(),
            &request.code,
            &request.name,
            request.description.as_deref(),
            request.points_or_default(),
        )?;
        if let Some(is_active) = request.is_active {
            code.is_active = is_active;
        }

        self.ctx.code_repo().create(&code).await?;
        info!(code_id = %code.id, points = code.points, "Code created");

        Ok(CodeView {
            code,
            claimants: Vec::new(),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update_code(
        &self,
        id: Snowflake,
        request: UpdateCodeRequest,
    ) -> ServiceResult<CodeView> {
        request.validate()?;

        let mut code = self.find_code(id).await?;
        code.apply(CodeUpdate::from(request))?;
        self.ctx.code_repo().update(&code).await?;

        info!(code_id = %id, is_active = code.is_active, "Code updated");
        self.with_claimants(code).await
    }

    /// Flip the active flag. Existing claims keep counting either way.
    #[instrument(skip(self))]
    pub async fn toggle_code(&self, id: Snowflake) -> ServiceResult<CodeView> {
        let mut code = self.find_code(id).await?;
        code.toggle_active();
        self.ctx.code_repo().update(&code).await?;

        info!(code_id = %id, is_active = code.is_active, "Code toggled");
        self.with_claimants(code).await
    }

    /// Delete a code and every claim on it
    #[instrument(skip(self))]
    pub async fn delete_code(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.code_repo().delete(id).await?;
        info!(code_id = %id, "Code deleted");
        Ok(())
    }

    async fn find_code(&self, id: Snowflake) -> ServiceResult<Code> {
        self.ctx
            .code_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CodeIdNotFound(id).into())
    }

    async fn with_claimants(&self, code: Code) -> ServiceResult<CodeView> {
        let claimants = self.ctx.claim_repo().find_claimants(code.id).await?;
        Ok(CodeView { code, claimants })
    }
}
