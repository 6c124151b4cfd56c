//! Service context - dependency container for services
//!
//! Holds the repositories, the credential and token services, and the id
//! generator. It carries no pool, so any store behind the traits will do.

use std::sync::Arc;

use hunt_common::auth::{JwtService, PasswordService};
use hunt_core::traits::{ClaimRepository, CodeRepository, UserRepository};
use hunt_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    code_repo: Arc<dyn CodeRepository>,
    claim_repo: Arc<dyn ClaimRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        code_repo: Arc<dyn CodeRepository>,
        claim_repo: Arc<dyn ClaimRepository>,
        jwt_service: Arc<JwtService>,
        password_service: PasswordService,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            code_repo,
            claim_repo,
            jwt_service,
            password_service,
            snowflake_generator,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn code_repo(&self) -> &dyn CodeRepository {
        self.code_repo.as_ref()
    }

    pub fn claim_repo(&self) -> &dyn ClaimRepository {
        self.claim_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    code_repo: Option<Arc<dyn CodeRepository>>,
    claim_repo: Option<Arc<dyn ClaimRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<PasswordService>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn code_repo(mut self, repo: Arc<dyn CodeRepository>) -> Self {
        self.code_repo = Some(repo);
        self
    }

    pub fn claim_repo(mut self, repo: Arc<dyn ClaimRepository>) -> Self {
        self.claim_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing.
    /// The password service falls back to the default Argon2 parameters.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.code_repo
                .ok_or_else(|| ServiceError::validation("code_repo is required"))?,
            self.claim_repo
                .ok_or_else(|| ServiceError::validation("claim_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.password_service.unwrap_or_default(),
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
