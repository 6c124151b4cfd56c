//! Connection pool and schema migrations

mod postgres;

pub use postgres::{create_pool, ping, run_migrations, DatabaseConfig, MIGRATIONS_DIR};
pub use sqlx::PgPool;
