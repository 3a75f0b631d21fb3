//! Error types for Tabemap

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabemapError {
    // Validation errors
    #[error("invalid input: {}", .errors.join(", "))]
    InvalidInput { errors: Vec<String> },

    // Store errors
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TabemapError {
    /// Wrap a validation failure, keeping every violated rule.
    pub fn invalid_input(errors: Vec<String>) -> Self {
        Self::InvalidInput { errors }
    }

    /// Wrap a store connection or query failure.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, TabemapError>;
