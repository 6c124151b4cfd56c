//! Configuration structs

mod app_config;

pub use app_config::{
    AdminBootstrapConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseSettings,
    Environment, JwtConfig, ServerConfig, MIN_JWT_SECRET_LEN,
};
