//! Code entity - a hunt waypoint players claim for points

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Points a code is worth when the creator does not say
pub const DEFAULT_POINTS: i32 = 10;

pub const MIN_POINTS: i32 = 1;

/// A claimable code. `code` is the opaque string printed in the QR URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub id: Snowflake,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub points: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial edit applied by an admin; `None` leaves a field unchanged.
/// An empty description clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points: Option<i32>,
    pub is_active: Option<bool>,
}

impl Code {
    /// Build a new active code, trimming and checking the admin's input.
    pub fn new(
        id: Snowflake,
        code: &str,
        name: &str,
        description: Option<&str>,
        points: i32,
    ) -> Result<Self, DomainError> {
        let code = required(code, "code")?;
        let name = required(name, "name")?;
        validate_points(points)?;

        let now = super::now();
        Ok(Self {
            id,
            code,
            name,
            description: optional(description),
            points,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Case-insensitive comparison against a scanned code string
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.eq_ignore_ascii_case(candidate.trim())
    }

    /// Fails with `CodeInactive` unless the code currently accepts claims
    pub fn ensure_claimable(&self) -> Result<(), DomainError> {
        if self.is_active {
            Ok(())
        } else {
            Err(DomainError::CodeInactive(self.code.clone()))
        }
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
        self.updated_at = super::now();
    }

    pub fn apply(&mut self, update: CodeUpdate) -> Result<(), DomainError> {
        if let Some(points) = update.points {
            validate_points(points)?;
        }
        if let Some(name) = update.name {
            self.name = required(&name, "name")?;
        }
        if let Some(description) = update.description {
            self.description = optional(Some(&description));
        }
        if let Some(points) = update.points {
            self.points = points;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = super::now();
        Ok(())
    }
}

pub fn validate_points(points: i32) -> Result<(), DomainError> {
    if points < MIN_POINTS {
        return Err(DomainError::InvalidPoints {
            value: points,
            min: MIN_POINTS,
        });
    }
    Ok(())
}

fn required(value: &str, field: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::ValidationError(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
