//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the raw input that was rejected, so callers can
/// report exactly what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 characters long.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthdayFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number length should be 10, got: {}", phone)
            }
            Self::InvalidBirthdayFormat(birthday) => {
                write!(f, "Birthday should have format DD.MM.YYYY, got: {}", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
