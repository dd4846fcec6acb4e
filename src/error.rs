//! Error types for the rating pipeline
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-pipeline scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("invalid match record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("failed to read match data from {path}: {message}")]
    IngestFailed { path: String, message: String },

    #[error("match feed is empty")]
    EmptyFeed,

    #[error("failed to write {path}: {message}")]
    ExportFailed { path: String, message: String },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
