//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Public columns of the users table; the password hash is read separately
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
