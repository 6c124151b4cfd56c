//! # hunt-service
//!
//! Application layer containing the claim and standings logic, the player and
//! admin use cases, and the DTOs the API serializes.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthService, ClaimService, CodeService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
