//! # hunt-db
//!
//! PostgreSQL implementations of the `hunt-core` repository traits via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The schema owns the invariants the hunt depends on: one claim per
//! (user, code) pair, case-insensitive unique code strings, and cascading
//! deletes from users and codes to their claims.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hunt_db::{create_pool, run_migrations, DatabaseConfig, PgClaimRepository, MIGRATIONS_DIR};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool, MIGRATIONS_DIR).await?;
//!     let claims = PgClaimRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{PgClaimRepository, PgCodeRepository, PgUserRepository};
