//! Crate error type
//!
//! Validation outcomes are never errors; they are reported through
//! [`ValidationResult`](crate::ValidationResult) and
//! [`FormValidationResult`](crate::FormValidationResult). `Error` only covers
//! loading a [`Rules`](crate::Rules) configuration.

use thiserror::Error;

/// Result alias for fallible configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading validation rules.
#[derive(Debug, Error)]
pub enum Error {
    /// The rules document is not valid JSON or has mistyped fields.
    #[error("failed to parse validation rules: {0}")]
    Parse(#[from] serde_json::Error),

    /// The username bounds cannot both be satisfied.
    #[error("username length bounds are inverted: minimum {min} exceeds maximum {max}")]
    InvertedUsernameBounds {
        /// Configured minimum length
        min: usize,
        /// Configured maximum length
        max: usize,
    },
}
