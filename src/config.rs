//! Configuration management for the address book binary.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// How the binary renders the upcoming birthdays report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `"<Weekday>: <names>"` line per day
    #[default]
    Text,
    /// JSON array of congratulation days
    Json,
}

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,

    /// Reference date for the report (default: the local date)
    pub today: Option<NaiveDate>,

    /// Length of the upcoming birthdays window in days (default: 7)
    pub window_days: u32,

    /// Report rendering (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_TODAY`: Reference date as `YYYY-MM-DD`
    /// - `ADDRESS_BOOK_WINDOW_DAYS`: Window length, 1-366 (default: 7)
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: `text`)
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let today = Self::parse_env_date("ADDRESS_BOOK_TODAY")?;
        let window_days = Self::parse_env_u32("ADDRESS_BOOK_WINDOW_DAYS", 7)?;

        if !(1..=366).contains(&window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let output = Self::parse_env_output("ADDRESS_BOOK_OUTPUT")?;

        Ok(Config {
            log_level,
            today,
            window_days,
            output,
        })
    }

    /// The configured reference date, or the local calendar date.
    pub fn today_or_local(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(&val, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date as YYYY-MM-DD, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    fn parse_env_output(var_name: &str) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "text" => Ok(OutputFormat::Text),
                "json" => Ok(OutputFormat::Json),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'text' or 'json', got: {}", val),
                }),
            },
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            today: None,
            window_days: 7,
            output: OutputFormat::Text,
        }
    }
}
