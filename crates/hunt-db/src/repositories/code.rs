//! PostgreSQL implementation of CodeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hunt_core::entities::Code;
use hunt_core::error::DomainError;
use hunt_core::traits::{CodeRepository, RepoResult};
use hunt_core::value_objects::Snowflake;

use crate::mappers::CodeRow;
use crate::models::CodeModel;

use super::error::{map_db_error, map_unique_violation};

const CODE_COLUMNS: &str =
    "id, code, name, description, points, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PgCodeRepository {
    pool: PgPool,
}

impl PgCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_where(&self, sql: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl CodeRepository for PgCodeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Code>> {
        let result = sqlx::query_as::<_, CodeModel>(&format!(
            "SELECT {CODE_COLUMNS} FROM codes WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Code::from))
    }

    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Code>> {
        // served by the unique index on LOWER(code)
        let result = sqlx::query_as::<_, CodeModel>(&format!(
            "SELECT {CODE_COLUMNS} FROM codes WHERE LOWER(code) = LOWER($1)"
        ))
        .bind(code.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Code::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Code>> {
        let results = sqlx::query_as::<_, CodeModel>(&format!(
            "SELECT {CODE_COLUMNS} FROM codes ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Code::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Code>> {
        let results = sqlx::query_as::<_, CodeModel>(&format!(
            "SELECT {CODE_COLUMNS} FROM codes WHERE is_active ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Code::from).collect())
    }

    #[instrument(skip(self, code), fields(code = %code.code))]
    async fn create(&self, code: &Code) -> RepoResult<()> {
        let row = CodeRow::from(code);
        sqlx::query(
            r"
            INSERT INTO codes (id, code, name, description, points, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(row.id)
        .bind(row.code)
        .bind(row.name)
        .bind(row.description)
        .bind(row.points)
        .bind(row.is_active)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::CodeAlreadyExists(code.code.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, code), fields(code_id = %code.id))]
    async fn update(&self, code: &Code) -> RepoResult<()> {
        let row = CodeRow::from(code);
        let result = sqlx::query(
            r"
            UPDATE codes
            SET name = $2, description = $3, points = $4, is_active = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.description)
        .bind(row.points)
        .bind(row.is_active)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CodeIdNotFound(code.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM codes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CodeIdNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        self.count_where("SELECT COUNT(*) FROM codes").await
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        self.count_where("SELECT COUNT(*) FROM codes WHERE is_active")
            .await
    }

    #[instrument(skip(self))]
    async fn count_unclaimed_active(&self) -> RepoResult<i64> {
        self.count_where(
            r"
            SELECT COUNT(*) FROM codes q
            WHERE q.is_active
              AND NOT EXISTS (SELECT 1 FROM claims c WHERE c.code_id = q.id)
            ",
        )
        .await
    }
}
