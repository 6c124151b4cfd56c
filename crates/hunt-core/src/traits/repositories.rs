//! Repository traits (ports) - the store the hunt runs against
//!
//! The domain layer says what it needs; `hunt-db` provides Postgres
//! implementations and the service tests provide in-memory ones.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Claim, ClaimDetail, Code, CodeClaimant, User, UserWithClaims};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (already normalized by the caller)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user.
    ///
    /// Fails with `UsernameTaken` or `EmailTaken` when the store's unique
    /// constraints reject the row.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Delete a user and, by cascade, all of their claims
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Code Repository
// ============================================================================

#[async_trait]
pub trait CodeRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Code>>;

    /// Case-insensitive exact match on the code string
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Code>>;

    /// Every code, newest first
    async fn list_all(&self) -> RepoResult<Vec<Code>>;

    /// Active codes, oldest first
    async fn list_active(&self) -> RepoResult<Vec<Code>>;

    /// Fails with `CodeAlreadyExists` when the code string is taken in any case
    async fn create(&self, code: &Code) -> RepoResult<()>;

    async fn update(&self, code: &Code) -> RepoResult<()>;

    /// Delete a code and, by cascade, all claims on it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_active(&self) -> RepoResult<i64>;

    /// Active codes that nobody has claimed yet
    async fn count_unclaimed_active(&self) -> RepoResult<i64>;
}

// ============================================================================
// Claim Repository
// ============================================================================

#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// Insert a claim.
    ///
    /// The store holds at most one claim per (user, code). A second insert for
    /// the same pair, concurrent or not, fails with `AlreadyClaimed`.
    async fn insert(&self, claim: &Claim) -> RepoResult<()>;

    /// A user's claims joined to their codes, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<ClaimDetail>>;

    /// Claimants of one code, oldest first
    async fn find_claimants(&self, code_id: Snowflake) -> RepoResult<Vec<CodeClaimant>>;

    /// Number of claims per code id, for the codes given
    async fn count_by_codes(&self, code_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;

    /// Every user with every claim they hold, read from one consistent snapshot
    async fn list_users_with_claims(&self) -> RepoResult<Vec<UserWithClaims>>;
}
