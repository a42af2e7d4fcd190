use thiserror::Error;

use crate::config::ConfigField;

/// Raised when generation parameters or the invocation payload are invalid.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigurationError {
    pub field: ConfigField,
    pub message: String,
}

impl ConfigurationError {
    pub fn new(field: ConfigField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Error for a payload that could not be parsed at all.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::new(ConfigField::Payload, message)
    }
}

/// Convenience alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
