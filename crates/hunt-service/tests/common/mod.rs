//! In-memory store for service tests
//!
//! One mutex guards users, codes and claims together, so every repository call
//! is atomic the way a single SQL statement is. The same uniqueness and
//! foreign-key rules as the schema are enforced.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use hunt_common::auth::{JwtService, PasswordService};
use hunt_core::entities::{Claim, ClaimDetail, Code, CodeClaimant, User, UserWithClaims};
use hunt_core::traits::{ClaimRepository, CodeRepository, RepoResult, UserRepository};
use hunt_core::{DomainError, Snowflake, SnowflakeGenerator};
use hunt_service::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "service-test-secret-that-is-long-enough";

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    codes: Vec<Code>,
    claims: Vec<Claim>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    ids: SnowflakeGenerator,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State::default()),
            ids: SnowflakeGenerator::new(7),
        })
    }

    /// Insert a player directly, skipping password hashing
    pub fn add_user(&self, username: &str) -> User {
        let user = User::new(
            self.ids.generate(),
            username.to_string(),
            format!("{username}@example.com"),
        );
        self.state.lock().users.push((user.clone(), "unused".to_string()));
        user
    }

    pub fn add_admin(&self, username: &str) -> User {
        let user = User::new_admin(
            self.ids.generate(),
            username.to_string(),
            format!("{username}@example.com"),
        );
        self.state.lock().users.push((user.clone(), "unused".to_string()));
        user
    }

    pub fn add_code(&self, code: &str, points: i32) -> Code {
        let code = Code::new(self.ids.generate(), code, code, None, points).unwrap();
        self.state.lock().codes.push(code.clone());
        code
    }

    pub fn set_active(&self, code_id: Snowflake, active: bool) {
        let mut state = self.state.lock();
        if let Some(code) = state.codes.iter_mut().find(|c| c.id == code_id) {
            code.is_active = active;
        }
    }

    pub fn claim_rows(&self, user_id: Snowflake, code_id: Snowflake) -> usize {
        self.state
            .lock()
            .claims
            .iter()
            .filter(|c| c.user_id == user_id && c.code_id == code_id)
            .count()
    }

    pub fn total_claims(&self) -> usize {
        self.state.lock().claims.len()
    }
}

impl State {
    fn detail(&self, claim: &Claim) -> Option<ClaimDetail> {
        let code = self.codes.iter().find(|c| c.id == claim.code_id)?;
        Some(ClaimDetail {
            claim_id: claim.id,
            user_id: claim.user_id,
            code_id: code.id,
            code: code.code.clone(),
            code_name: code.name.clone(),
            points: code.points,
            claimed_at: claim.claimed_at,
        })
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state
            .users
            .iter()
            .any(|(u, _)| u.username.to_lowercase() == user.username.to_lowercase())
        {
            return Err(DomainError::UsernameTaken);
        }
        if state.users.iter().any(|(u, _)| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::EmailTaken);
        }
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.users.len();
        state.users.retain(|(u, _)| u.id != id);
        if state.users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        state.claims.retain(|c| c.user_id != id);
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.lock().users.len() as i64)
    }
}

#[async_trait]
impl CodeRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Code>> {
        Ok(self.state.lock().codes.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Code>> {
        Ok(self
            .state
            .lock()
            .codes
            .iter()
            .find(|c| c.matches(code))
            .cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Code>> {
        let mut codes = self.state.lock().codes.clone();
        codes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(codes)
    }

    async fn list_active(&self) -> RepoResult<Vec<Code>> {
        let mut codes: Vec<Code> = self
            .state
            .lock()
            .codes
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        codes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(codes)
    }

    async fn create(&self, code: &Code) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.codes.iter().any(|c| c.matches(&code.code)) {
            return Err(DomainError::CodeAlreadyExists(code.code.clone()));
        }
        state.codes.push(code.clone());
        Ok(())
    }

    async fn update(&self, code: &Code) -> RepoResult<()> {
        let mut state = self.state.lock();
        let slot = state
            .codes
            .iter_mut()
            .find(|c| c.id == code.id)
            .ok_or(DomainError::CodeIdNotFound(code.id))?;
        *slot = code.clone();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.codes.len();
        state.codes.retain(|c| c.id != id);
        if state.codes.len() == before {
            return Err(DomainError::CodeIdNotFound(id));
        }
        state.claims.retain(|c| c.code_id != id);
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.lock().codes.len() as i64)
    }

    async fn count_active(&self) -> RepoResult<i64> {
        Ok(self.state.lock().codes.iter().filter(|c| c.is_active).count() as i64)
    }

    async fn count_unclaimed_active(&self) -> RepoResult<i64> {
        let state = self.state.lock();
        Ok(state
            .codes
            .iter()
            .filter(|c| c.is_active && !state.claims.iter().any(|cl| cl.code_id == c.id))
            .count() as i64)
    }
}

#[async_trait]
impl ClaimRepository for MemoryStore {
    async fn insert(&self, claim: &Claim) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.users.iter().any(|(u, _)| u.id == claim.user_id) {
            return Err(DomainError::UserNotFound(claim.user_id));
        }
        if !state.codes.iter().any(|c| c.id == claim.code_id) {
            return Err(DomainError::CodeIdNotFound(claim.code_id));
        }
        if state
            .claims
            .iter()
            .any(|c| c.user_id == claim.user_id && c.code_id == claim.code_id)
        {
            return Err(DomainError::AlreadyClaimed);
        }
        state.claims.push(claim.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<ClaimDetail>> {
        let state = self.state.lock();
        let mut details: Vec<ClaimDetail> = state
            .claims
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter_map(|c| state.detail(c))
            .collect();
        details.sort_by(|a, b| b.claimed_at.cmp(&a.claimed_at).then(b.claim_id.cmp(&a.claim_id)));
        Ok(details)
    }

    async fn find_claimants(&self, code_id: Snowflake) -> RepoResult<Vec<CodeClaimant>> {
        let state = self.state.lock();
        let mut claimants: Vec<(Snowflake, CodeClaimant)> = state
            .claims
            .iter()
            .filter(|c| c.code_id == code_id)
            .filter_map(|c| {
                let (user, _) = state.users.iter().find(|(u, _)| u.id == c.user_id)?;
                Some((
                    c.id,
                    CodeClaimant {
                        user_id: user.id,
                        username: user.username.clone(),
                        claimed_at: c.claimed_at,
                    },
                ))
            })
            .collect();
        claimants.sort_by(|(a_id, a), (b_id, b)| a.claimed_at.cmp(&b.claimed_at).then(a_id.cmp(b_id)));
        Ok(claimants.into_iter().map(|(_, c)| c).collect())
    }

    async fn count_by_codes(&self, code_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>> {
        let state = self.state.lock();
        Ok(code_ids
            .iter()
            .map(|id| {
                let n = state.claims.iter().filter(|c| c.code_id == *id).count() as i64;
                (*id, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.lock().claims.len() as i64)
    }

    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        Ok(self
            .state
            .lock()
            .claims
            .iter()
            .filter(|c| c.claimed_at >= since)
            .count() as i64)
    }

    async fn list_users_with_claims(&self) -> RepoResult<Vec<UserWithClaims>> {
        let state = self.state.lock();
        let mut users: Vec<User> = state.users.iter().map(|(u, _)| u.clone()).collect();
        users.sort_by_key(|u| u.id);

        Ok(users
            .into_iter()
            .map(|user| UserWithClaims {
                claims: state
                    .claims
                    .iter()
                    .filter(|c| c.user_id == user.id)
                    .filter_map(|c| state.detail(c))
                    .collect(),
                user,
            })
            .collect())
    }
}

/// A service context whose three repositories are all `store`
pub fn context(store: &Arc<MemoryStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .code_repo(store.clone())
        .claim_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .password_service(PasswordService::new())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}
