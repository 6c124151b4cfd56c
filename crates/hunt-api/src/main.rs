//! QR Hunt API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p hunt-api
//! ```
//!
//! Configuration is loaded from environment variables, after a `.env` file if present.

use hunt_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    if let Err(e) = hunt_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
