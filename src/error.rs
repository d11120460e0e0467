//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Listener bind or socket error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
