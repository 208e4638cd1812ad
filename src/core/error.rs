//! Error types for solar_almanac
//!
//! This module provides structured error handling using thiserror.
//! Query answering never fails; these errors come from configuration,
//! persistence, and the shell boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for almanac operations
pub type Result<T> = std::result::Result<T, AlmanacError>;

/// Errors that can occur outside of query interpretation
#[derive(Error, Debug)]
pub enum AlmanacError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty or whitespace-only query rejected by a shell
    #[error("Please enter a question.")]
    EmptyQuery,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Catalog store could not complete an operation
    #[error("Catalog store failure at {path}: {message}")]
    StoreFailure { path: PathBuf, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AlmanacError>,
    },
}

impl AlmanacError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AlmanacError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        AlmanacError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a store failure for the given path
    pub fn store_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AlmanacError::StoreFailure {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
