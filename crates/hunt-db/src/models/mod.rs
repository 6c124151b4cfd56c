//! Row types read back from Postgres

mod claim;
mod code;
mod user;

pub use claim::{ClaimDetailModel, CodeClaimCountModel, CodeClaimantModel};
pub use code::CodeModel;
pub use user::UserModel;
