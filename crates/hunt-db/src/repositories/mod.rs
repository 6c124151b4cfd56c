//! Repository implementations

mod claim;
mod code;
pub mod error;
mod user;

pub use claim::PgClaimRepository;
pub use code::PgCodeRepository;
pub use user::PgUserRepository;
