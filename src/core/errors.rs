//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeartcheckError>;

/// Main error type for heartcheck operations
#[derive(Debug, Error)]
pub enum HeartcheckError {
    /// Input validation errors, naming the offending field and its valid range
    #[error("{field} must be between {min} and {max} (got {value})")]
    InvalidInput {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Record store failures (save, list, delete)
    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl HeartcheckError {
    /// Create a validation error for a field outside its valid range
    pub fn invalid_input(field: &'static str, min: f64, max: f64, value: f64) -> Self {
        Self::InvalidInput {
            field,
            min,
            max,
            value,
        }
    }

    /// Create a persistence error with path context
    pub fn persistence(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Persistence {
            message: message.into(),
            path,
        }
    }

    /// Whether the error is fixable by correcting user input
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Configuration(_)
        )
    }
}
