//! Application configuration loaded from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Bound on each request/response cycle, applied to every connection.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Application configuration, resolved once at startup.
///
/// The environment supplies `SERVICE_NAME` and `SERVICE_PORT`; the graceful
/// timeout comes from the command line and is written in by `main` after
/// parsing. The value is immutable from then on.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name reported in the `service-name` field of every response.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// TCP port the listener binds to, on all interfaces.
    #[serde(default = "default_service_port")]
    pub service_port: u16,

    /// How long in-flight connections get to finish during shutdown.
    #[serde(skip_deserializing, default = "default_graceful_timeout")]
    pub graceful_timeout: Duration,
}

fn default_service_name() -> String {
    "http-service".to_string()
}

fn default_service_port() -> u16 {
    8080
}

fn default_graceful_timeout() -> Duration {
    Duration::from_secs(15)
}

impl Config {
    /// Load configuration from environment, reading a .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check that the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.service_name.is_empty() {
            return Err(ServiceError::InvalidConfig(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.service_port))
    }
}
