//! # hunt-core
//!
//! Domain layer of the QR hunt: users, codes, claims, the standings rules that
//! turn claims into a leaderboard, and the repository traits the store implements.
//! No infrastructure types leak in here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    rank_users, Claim, ClaimDetail, Code, CodeClaimant, CodeUpdate, RankInfo, RankedUser, User,
    UserTotals, UserWithClaims, DEFAULT_POINTS, MIN_POINTS,
};
pub use error::DomainError;
pub use traits::{ClaimRepository, CodeRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
