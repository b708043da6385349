//! Error types for the address book.
//!
//! Field validation failures live in [`crate::domain::ValidationError`];
//! this module defines the remaining errors using `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::DotenvError("line 3".to_string());
        assert_eq!(err.to_string(), "Failed to load .env file: line 3");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_WINDOW_DAYS".to_string(),
            reason: "Must be between 1 and 366".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_WINDOW_DAYS"));
        assert!(err.to_string().contains("Must be between 1 and 366"));
    }
}
