//! Domain error types

use thiserror::Error;

/// Error when an unknown icon name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid icon: \"{input}\". Valid icons are: info, success, warning, error, performance")]
pub struct InvalidIconError {
    pub input: String,
}

/// Error when an unknown notification backend is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: desktop, memory")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
