//! Domain entities

use chrono::{DateTime, SubsecRound, Utc};

mod claim;
mod code;
mod standing;
mod user;

pub use claim::{Claim, ClaimDetail, CodeClaimant};
pub use code::{Code, CodeUpdate, DEFAULT_POINTS, MIN_POINTS};
pub use standing::{rank_users, RankInfo, RankedUser, UserTotals, UserWithClaims};
pub use user::User;

/// Current time, truncated to the microsecond precision the database keeps
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
