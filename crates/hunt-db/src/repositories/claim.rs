//! PostgreSQL implementation of ClaimRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use hunt_core::entities::{Claim, ClaimDetail, CodeClaimant, User, UserWithClaims};
use hunt_core::error::DomainError;
use hunt_core::traits::{ClaimRepository, RepoResult};
use hunt_core::value_objects::Snowflake;

use crate::models::{ClaimDetailModel, CodeClaimCountModel, CodeClaimantModel, UserModel};

use super::error::{map_db_error, map_insert_violation};

const CLAIM_DETAIL_SELECT: &str = r"
    SELECT c.id AS claim_id, c.user_id, c.code_id, q.code, q.name AS code_name, q.points, c.claimed_at
    FROM claims c
    JOIN codes q ON q.id = c.code_id
";

#[derive(Clone)]
pub struct PgClaimRepository {
    pool: PgPool,
}

impl PgClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimRepository for PgClaimRepository {
    #[instrument(skip(self, claim), fields(user_id = %claim.user_id, code_id = %claim.code_id))]
    async fn insert(&self, claim: &Claim) -> RepoResult<()> {
        // claims_user_code_key decides races: exactly one concurrent insert wins
        sqlx::query(
            r"
            INSERT INTO claims (id, user_id, code_id, claimed_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(claim.id.into_inner())
        .bind(claim.user_id.into_inner())
        .bind(claim.code_id.into_inner())
        .bind(claim.claimed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_violation(
                e,
                |_| DomainError::AlreadyClaimed,
                |constraint| match constraint {
                    Some(name) if name.contains("code_id") => {
                        DomainError::CodeIdNotFound(claim.code_id)
                    }
                    _ => DomainError::UserNotFound(claim.user_id),
                },
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<ClaimDetail>> {
        let results = sqlx::query_as::<_, ClaimDetailModel>(&format!(
            "{CLAIM_DETAIL_SELECT} WHERE c.user_id = $1 ORDER BY c.claimed_at DESC, c.id DESC"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClaimDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_claimants(&self, code_id: Snowflake) -> RepoResult<Vec<CodeClaimant>> {
        let results = sqlx::query_as::<_, CodeClaimantModel>(
            r"
            SELECT c.user_id, u.username, c.claimed_at
            FROM claims c
            JOIN users u ON u.id = c.user_id
            WHERE c.code_id = $1
            ORDER BY c.claimed_at, c.id
            ",
        )
        .bind(code_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CodeClaimant::from).collect())
    }

    #[instrument(skip(self, code_ids), fields(codes = code_ids.len()))]
    async fn count_by_codes(&self, code_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>> {
        let ids: Vec<i64> = code_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, CodeClaimCountModel>(
            r"
            SELECT code_id, COUNT(*) AS claim_count
            FROM claims
            WHERE code_id = ANY($1)
            GROUP BY code_id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (Snowflake::new(row.code_id), row.claim_count))
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM claims")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM claims WHERE claimed_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_users_with_claims(&self) -> RepoResult<Vec<UserWithClaims>> {
        // Both reads see the same snapshot, so no claim appears without its user.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let users = sqlx::query_as::<_, UserModel>(
            "SELECT id, username, email, is_admin, created_at FROM users ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let claims = sqlx::query_as::<_, ClaimDetailModel>(&format!(
            "{CLAIM_DETAIL_SELECT} ORDER BY c.claimed_at, c.id"
        ))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let mut by_user: HashMap<i64, Vec<ClaimDetail>> = HashMap::new();
        for claim in claims {
            by_user
                .entry(claim.user_id)
                .or_default()
                .push(ClaimDetail::from(claim));
        }

        Ok(users
            .into_iter()
            .map(|model| {
                let claims = by_user.remove(&model.id).unwrap_or_default();
                UserWithClaims {
                    user: User::from(model),
                    claims,
                }
            })
            .collect())
    }
}
