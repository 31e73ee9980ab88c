//! Environment-sourced service configuration
//!
//! Configuration is read once at startup into an owned struct and handed
//! to the router/binary, never re-read per request.

use thiserror::Error;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was present but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Task Store Service configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection string
    pub database_url: String,

    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,
}

impl StoreConfig {
    /// Read configuration from the process environment
    ///
    /// `TASKSTORE_DATABASE_URL` defaults to a file database created on
    /// first use; `HOST`/`PORT` default to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("TASKSTORE_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:tasks.db?mode=rwc".to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port_raw = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            value: port_raw,
        })?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
