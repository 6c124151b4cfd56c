//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use hunt_core::{CodeUpdate, DEFAULT_POINTS};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Admin Code Requests
// ============================================================================

/// Create code request
///
/// Blank `code` or `name` is rejected after trimming by the domain.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCodeRequest {
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Points must be at least 1"))]
    pub points: Option<i32>,

    pub is_active: Option<bool>,
}

impl CreateCodeRequest {
    pub fn points_or_default(&self) -> i32 {
        self.points.unwrap_or(DEFAULT_POINTS)
    }
}

/// Partial update of a code; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCodeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    /// Empty string clears the description
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Points must be at least 1"))]
    pub points: Option<i32>,

    pub is_active: Option<bool>,
}

impl From<UpdateCodeRequest> for CodeUpdate {
    fn from(req: UpdateCodeRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            points: req.points,
            is_active: req.is_active,
        }
    }
}
