//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Output format of a birthday, always zero-padded.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Day and month take one or two digits, the year exactly four.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$")
        .expect("Failed to compile birthday regex")
});

/// A validated birth date.
///
/// Parsed from `DD.MM.YYYY` text where day and month may omit their
/// leading zero. Impossible calendar dates such as `32.01.2000` or
/// `29.02.2023` are rejected. Always rendered back zero-padded.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.4.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.04.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` if the text does not
    /// match the format or names a date that does not exist.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_date(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthdayFormat(raw.to_string()))
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_REGEX.captures(raw)?;
        let day = caps[1].parse::<u32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let year = caps[3].parse::<i32>().ok()?;

        if year == 0 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Wrap a date the caller already holds.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month of birth (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month of birth (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
