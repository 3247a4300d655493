use std::sync::OnceLock;

use crate::server::error::{config::ConfigError, AppError};

/// Deployment mode, derived from `APP_ENV`.
///
/// Production mode redacts diagnostic traces from error responses;
/// every other value (including an unset variable) is development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

impl Environment {
    /// Reads the deployment mode from `APP_ENV`.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if value == "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Records the process-wide deployment mode. First call wins;
    /// subsequent calls are ignored.
    pub fn set_global(environment: Environment) {
        let _ = ENVIRONMENT.set(environment);
    }

    /// The process-wide deployment mode, defaulting to development when
    /// bootstrap has not recorded one (as in tests).
    pub fn global() -> Environment {
        *ENVIRONMENT.get().unwrap_or(&Environment::Development)
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base_path: String,
    pub database_url: String,
    /// Comma-separated origin whitelist, parsed once by the router.
    pub whitelisted_origins: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: std::env::var("HOST")
                .map_err(|_| ConfigError::MissingEnvVar("HOST".to_string()))?,
            port: std::env::var("PORT")
                .map_err(|_| ConfigError::MissingEnvVar("PORT".to_string()))?
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            api_base_path: std::env::var("API_BASE_PATH")
                .map_err(|_| ConfigError::MissingEnvVar("API_BASE_PATH".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            // An absent whitelist is an empty whitelist: every origin is
            // rejected until one is configured.
            whitelisted_origins: std::env::var("WHITELISTED_ORIGINS").unwrap_or_default(),
            environment: Environment::from_env(),
        })
    }
}
