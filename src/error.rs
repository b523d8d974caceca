//! Error types for obsgrade.
//!
//! The grading engine itself is total and never fails. Errors only arise on
//! the ambient surfaces: loading configuration, reading input, and the CLI's
//! strict mode.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for obsgrade operations.
#[derive(Error, Debug)]
pub enum ObsError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration (or reference passage) could not be parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Strict scoring found penalized observations.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl ObsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ObsError::UserError(_) => exit_codes::USER_ERROR,
            ObsError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            ObsError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for obsgrade operations.
pub type Result<T> = std::result::Result<T, ObsError>;
