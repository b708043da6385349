//! Address Book - an in-memory contact directory with birthday reminders.
//!
//! Contacts carry a validated name, any number of 10-character phone
//! numbers and an optional birthday. The book answers which contacts should
//! be congratulated in the coming week, moving weekend birthdays onto the
//! following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **book**: The name-keyed `AddressBook` store
//! - **scheduling**: Congratulation date arithmetic and the weekly report
//! - **error**: Error types and result aliases
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//! use chrono::NaiveDate;
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//! john.add_birthday("12.3.2000").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! assert_eq!(book.get_birthdays_per_week(today).to_string(), "Tuesday: John");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod scheduling;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{ConfigError, ConfigResult, ValidationResult};
pub use models::Record;
pub use scheduling::{CongratulationDay, WeeklyReport};
