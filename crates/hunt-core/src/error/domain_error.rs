//! Domain errors - expected outcomes of hunt operations

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Code not found: {0}")]
    CodeNotFound(String),

    #[error("Code not found: {0}")]
    CodeIdNotFound(Snowflake),

    // =========================================================================
    // Claim Rejections
    // =========================================================================
    #[error("Code {0} is not active")]
    CodeInactive(String),

    #[error("Code already claimed by this user")]
    AlreadyClaimed,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Points must be at least {min}, got {value}")]
    InvalidPoints { value: i32, min: i32 },

    #[error("Cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Code already exists: {0}")]
    CodeAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CodeNotFound(_) | Self::CodeIdNotFound(_) => "UNKNOWN_CODE",

            Self::CodeInactive(_) => "CODE_INACTIVE",
            Self::AlreadyClaimed => "ALREADY_CLAIMED",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPoints { .. } => "INVALID_POINTS",
            Self::CannotDeleteSelf => "CANNOT_DELETE_SELF",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::CodeAlreadyExists(_) => "CODE_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::CodeNotFound(_) | Self::CodeIdNotFound(_)
        )
    }

    /// A claim the player asked for but cannot have
    pub fn is_rejected_claim(&self) -> bool {
        matches!(self, Self::CodeInactive(_) | Self::AlreadyClaimed)
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPoints { .. } | Self::CannotDeleteSelf
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::EmailTaken | Self::CodeAlreadyExists(_)
        )
    }
}
