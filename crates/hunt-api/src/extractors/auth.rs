//! Authentication extractors
//!
//! Validate the bearer token and reload its user, so every handler sees the
//! store's current view of who is calling.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hunt_core::{Snowflake, User};
use hunt_service::{AdminService, AuthService};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user for the current request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Snowflake,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

/// Load the caller named by the bearer token
async fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<User, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

    let app_state = AppState::from_ref(state);
    AuthService::new(app_state.service_context())
        .authenticate(bearer.token())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::from(e)
        })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await.map(AuthUser::from)
    }
}

/// Authenticated user holding the admin flag
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state).await?;
        let action = format!("{} {}", parts.method, parts.uri.path());

        AdminService::ensure_admin(&user, &action)?;
        Ok(AdminUser(AuthUser::from(user)))
    }
}
