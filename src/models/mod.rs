//! Data models for the address book.
//!
//! A [`Record`] aggregates the validated fields of one contact.

pub mod record;

pub use record::Record;
