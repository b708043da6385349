//! Test fixtures and sample data shared by the integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a calendar date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// The book from the command-line demo: John with two phones, Jane with a
/// phone and a birthday.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        &["1234567890", "5555555555"],
        None,
    ));
    book.add_record(sample_record("Jane", &["9876543210"], Some("15.4.1990")));
    book
}
