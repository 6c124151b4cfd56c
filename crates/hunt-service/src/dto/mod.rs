//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities and service results to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCodeRequest, LoginRequest, RegisterRequest, UpdateCodeRequest};

pub use responses::{
    ActiveCodeResponse, ActiveCodesResponse, AdminCodeResponse, AdminStatsResponse,
    AdminUserResponse, AuthResponse, ClaimResponse, CodeClaimResponse, CodeClaimantResponse,
    CodeViewResponse, FoundCodeResponse, FoundCodesResponse, HealthChecks, HealthResponse,
    LeaderboardCodeResponse, LeaderboardEntryResponse, LeaderboardResponse, ReadinessResponse,
    UserProfileResponse, UserStatsResponse, UserTotalsResponse,
};

pub use mappers::{AdminStats, ClaimOutcome, CodeView, CodeWithFoundCount, UserStats, UserWithTotals};
