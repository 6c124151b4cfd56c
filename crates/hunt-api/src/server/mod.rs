//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use hunt_common::{AppConfig, AppError, JwtService, PasswordService};
use hunt_core::SnowflakeGenerator;
use hunt_db::{
    create_pool, run_migrations, DatabaseConfig, PgClaimRepository, PgCodeRepository,
    PgUserRepository, MIGRATIONS_DIR,
};
use hunt_service::{AuthService, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, &state.config().cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, MIGRATIONS_DIR)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .code_repo(Arc::new(PgCodeRepository::new(pool.clone())))
        .claim_repo(Arc::new(PgClaimRepository::new(pool.clone())))
        .jwt_service(Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expiry)))
        .password_service(PasswordService::new())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.app.worker_id)))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    if let Some(admin) = &config.admin {
        AuthService::new(&service_context)
            .ensure_admin(admin)
            .await
            .map_err(AppError::from)?;
    }

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
