//! User entity - a registered player

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Player account. The password hash stays in the store and never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            is_admin: false,
            created_at: super::now(),
        }
    }

    pub fn new_admin(id: Snowflake, username: String, email: String) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id, username, email)
        }
    }

    /// Emails are matched without regard to case or surrounding whitespace
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
