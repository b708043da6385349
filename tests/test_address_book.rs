//! Integration tests for the address book store and record editing.

mod fixtures;

use address_book::{AddressBook, Phone, Record, ValidationError};
use fixtures::*;

#[test]
fn test_demo_flow() {
    let mut book = sample_book();

    assert_eq!(
        book.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555\n\
         Contact name: Jane, phones: 9876543210, birthday 15.04.1990"
    );

    let john = book.find_mut("John").expect("John is in the book");
    assert_eq!(john.edit_phone("1234567890", "1112223333"), Ok(1));
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );

    let found = john.find_phone("5555555555").map(Phone::as_str);
    assert_eq!(found, Some("5555555555"));

    assert!(book.delete("Jane").is_some());
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_same_name_leaves_single_entry() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890"], Some("01.01.1990")));
    book.add_record(sample_record("John", &["5555555555"], None));

    assert_eq!(book.len(), 1);
    let john = book.find("John").unwrap();
    assert!(john.find_phone("1234567890").is_none());
    assert!(john.birthday().is_none());
}

#[test]
fn test_lookup_misses_are_not_errors() {
    let mut book = sample_book();

    assert!(book.find("Nobody").is_none());
    assert!(book.find_mut("Nobody").is_none());
    assert!(book.delete("Nobody").is_none());
    assert_eq!(book.len(), 2);
}

#[test]
fn test_failed_validation_does_not_corrupt_stored_record() {
    let mut book = sample_book();
    let before = book.find("Jane").unwrap().clone();

    let jane = book.find_mut("Jane").unwrap();
    assert!(matches!(
        jane.add_phone("12345"),
        Err(ValidationError::InvalidPhone(_))
    ));
    assert!(matches!(
        jane.edit_phone("9876543210", "98765"),
        Err(ValidationError::InvalidPhone(_))
    ));
    assert!(matches!(
        jane.add_birthday("31.04.1990"),
        Err(ValidationError::InvalidBirthdayFormat(_))
    ));

    assert_eq!(book.find("Jane").unwrap(), &before);
}

#[test]
fn test_phone_length_is_the_only_rule() {
    for len in 0..=20 {
        let raw = "x".repeat(len);
        let result = Phone::new(raw.as_str());
        if len == 10 {
            assert!(result.is_ok(), "length {} should be accepted", len);
        } else {
            assert_eq!(result, Err(ValidationError::InvalidPhone(raw)));
        }
    }
}

#[test]
fn test_record_rejects_empty_name() {
    assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
}
