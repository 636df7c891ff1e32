//! Runtime configuration from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "mysql://localhost/school";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Environment-derived configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// `PORT`, default 3000.
    pub port: u16,
    /// `DATABASE_URL`; credentials and host belong to the deployment, not the code.
    pub database_url: String,
    /// `MAX_CONNECTIONS` for the pool, default 5.
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("MAX_CONNECTIONS").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        database_url: Option<String>,
        max_connections: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let max_connections = match max_connections {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPoolSize(raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(AppConfig {
            port,
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections,
        })
    }
}
