//! Authentication service
//!
//! Handles registration, login, bearer-token checks and the bootstrap admin.

use hunt_common::auth::validate_password_strength;
use hunt_common::{AdminBootstrapConfig, AppError};
use hunt_core::entities::User;
use hunt_core::DomainError;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new player
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Length rules apply to the stored form
        let request = RegisterRequest {
            username: request.username.trim().to_string(),
            ..request
        };
        request.validate()?;
        validate_password_strength(&request.password)?;

        let username = request.username.clone();
        let email = User::normalize_email(&request.email);
        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = User::new(self.ctx.generate_id(), username, email);

        // Uniqueness is left to the store; duplicates come back as conflicts
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        self.issue_for(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;
        let email = User::normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: wrong password"))?;

        info!(user_id = %user.id, "User logged in");

        self.issue_for(&user)
    }

    /// Resolve a bearer token to the user it belongs to.
    ///
    /// The user is reloaded, so a deleted account stops working immediately and
    /// the admin flag always reflects the store rather than the token.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().verify(token)?;
        let user_id = claims.user_id()?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Token for a user that no longer exists");
                ServiceError::App(AppError::InvalidToken)
            })
    }

    /// Make sure the configured admin account exists.
    ///
    /// An account already holding the email is left as it is.
    #[instrument(skip(self, admin), fields(username = %admin.username))]
    pub async fn ensure_admin(&self, admin: &AdminBootstrapConfig) -> ServiceResult<User> {
        let email = User::normalize_email(&admin.email);

        if let Some(existing) = self.ctx.user_repo().find_by_email(&email).await? {
            if !existing.is_admin {
                warn!(user_id = %existing.id, "Bootstrap admin email belongs to a non-admin account");
            }
            return Ok(existing);
        }

        let password_hash = self.ctx.password_service().hash(&admin.password)?;
        let user = User::new_admin(
            self.ctx.generate_id(),
            admin.username.trim().to_string(),
            email.clone(),
        );
        match self.ctx.user_repo().create(&user, &password_hash).await {
            Ok(()) => {
                info!(user_id = %user.id, "Admin account created");
                Ok(user)
            }
            // another instance created it first
            Err(e @ (DomainError::EmailTaken | DomainError::UsernameTaken)) => {
                match self.ctx.user_repo().find_by_email(&email).await? {
                    Some(existing) => Ok(existing),
                    None => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    fn issue_for(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.username, user.is_admin)?;

        Ok(AuthResponse::new(token, user))
    }
}
