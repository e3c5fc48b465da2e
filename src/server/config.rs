use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Server configuration read from the environment at startup.
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// Upper bound of the database connection pool
    pub database_max_connections: u32,
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Environment
    /// - `DATABASE_URL` - Required, PostgreSQL or SQLite connection string
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 10
    /// - `BIND_ADDRESS` - Optional, defaults to `0.0.0.0:8080`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_max_connections(optional(
                "DATABASE_MAX_CONNECTIONS",
            ))?,
            bind_address: parse_bind_address(optional("BIND_ADDRESS"))?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bind_address(value: Option<String>) -> Result<SocketAddr, ConfigError> {
    let value = value.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    value
        .trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
            var: "BIND_ADDRESS".to_string(),
            reason: e.to_string(),
        })
}

fn parse_max_connections(value: Option<String>) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_DATABASE_MAX_CONNECTIONS);
    };

    match value.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: "DATABASE_MAX_CONNECTIONS".to_string(),
            reason: "must be greater than 0".to_string(),
        }),
        Ok(max) => Ok(max),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "DATABASE_MAX_CONNECTIONS".to_string(),
            reason: e.to_string(),
        }),
    }
}
