//! Environment-sourced service configuration
//!
//! Read once at startup. A missing gateway URL is fatal before the
//! listener binds — there is nothing useful this service can do without
//! a backend to talk to.

use std::time::Duration;

use thiserror::Error;

/// Default bound on outbound calls to the task store
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable was absent
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A value was present but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Web Frontend Service configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Base URL of the task store (gateway), no trailing slash
    pub api_gateway_url: String,

    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Upper bound on each outbound call to the task store
    pub request_timeout: Duration,
}

impl WebConfig {
    /// Read configuration from the process environment
    ///
    /// `API_GATEWAY_URL` is required; `HOST`/`PORT` default to
    /// `127.0.0.1:8080`, `TASKSTORE_TIMEOUT_SECS` to 10.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_gateway_url = std::env::var("API_GATEWAY_URL")
            .map_err(|_| ConfigError::MissingVar("API_GATEWAY_URL"))?
            .trim_end_matches('/')
            .to_string();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port_raw = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            value: port_raw,
        })?;

        let timeout_raw = std::env::var("TASKSTORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string());
        let timeout_secs = timeout_raw
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "TASKSTORE_TIMEOUT_SECS",
                value: timeout_raw,
            })?;

        Ok(Self {
            api_gateway_url,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
