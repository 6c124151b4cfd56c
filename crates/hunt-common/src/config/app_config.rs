//! Application configuration
//!
//! Everything comes from environment variables, with a `.env` file loaded first
//! when one exists.

use serde::Deserialize;
use std::env;

/// Shortest JWT secret accepted for HS256
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    /// Admin account ensured at startup, when all three variables are set
    pub admin: Option<AdminBootstrapConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    /// Snowflake worker id, below 1024
    #[serde(default)]
    pub worker_id: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations before serving
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub expiry: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Empty or `*` means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Clone, Deserialize)]
pub struct AdminBootstrapConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrapConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// Default value functions
fn default_app_name() -> String {
    "qr-hunt".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let app = AppSettings {
            name: read("APP_NAME").unwrap_or_else(default_app_name),
            env: match read("APP_ENV") {
                Some(s) => Environment::parse(&s).ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
                None => Environment::default(),
            },
            worker_id: parsed(read("WORKER_ID"), "WORKER_ID")?.unwrap_or(0),
        };
        if app.worker_id >= 1024 {
            return Err(ConfigError::InvalidValue(
                "WORKER_ID",
                format!("{} (must be < 1024)", app.worker_id),
            ));
        }

        let api = ServerConfig {
            host: read("API_HOST").unwrap_or_else(default_host),
            port: parsed(read("API_PORT"), "API_PORT")?.unwrap_or_else(default_port),
        };

        let database = DatabaseSettings {
            url: read("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
            max_connections: parsed(read("DATABASE_MAX_CONNECTIONS"), "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or_else(default_max_connections),
            min_connections: parsed(read("DATABASE_MIN_CONNECTIONS"), "DATABASE_MIN_CONNECTIONS")?
                .unwrap_or_else(default_min_connections),
            run_migrations: parsed(read("RUN_MIGRATIONS"), "RUN_MIGRATIONS")?
                .unwrap_or_else(default_true),
        };

        let secret = read("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET",
                format!("must be at least {MIN_JWT_SECRET_LEN} bytes"),
            ));
        }
        let jwt = JwtConfig {
            secret,
            expiry: parsed(read("JWT_EXPIRY"), "JWT_EXPIRY")?.unwrap_or_else(default_token_expiry),
        };

        let cors = CorsConfig {
            allowed_origins: read("CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        };

        let admin = match (
            read("ADMIN_USERNAME"),
            read("ADMIN_EMAIL"),
            read("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(email), Some(password)) => Some(AdminBootstrapConfig {
                username,
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            app,
            api,
            database,
            jwt,
            cors,
            admin,
        })
    }
}

fn parsed<T: std::str::FromStr>(
    value: Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| v.parse::<T>().map_err(|_| ConfigError::InvalidValue(key, v)))
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
