//! Configuration loading errors.

use thiserror::Error;

/// Errors raised while resolving runtime settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An override value could not be parsed
    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The process-wide settings were already set
    #[error("Settings already initialized")]
    AlreadyInitialized,

    /// An explicitly requested dotenv file could not be loaded
    #[error("Failed to load env file: {0}")]
    EnvFile(String),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "INVALID_VALUE",
            ConfigError::AlreadyInitialized => "ALREADY_INITIALIZED",
            ConfigError::EnvFile(_) => "ENV_FILE_ERROR",
            ConfigError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }

    pub fn env_file(msg: impl Into<String>) -> Self {
        ConfigError::EnvFile(msg.into())
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
