//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the length of one
//! request and holds no state of its own.

pub mod admin;
pub mod auth;
pub mod claim;
pub mod code;
pub mod context;
pub mod error;
pub mod user;

pub use admin::AdminService;
pub use auth::AuthService;
pub use claim::ClaimService;
pub use code::CodeService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
