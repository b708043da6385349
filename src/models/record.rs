//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a validated name, an ordered list of phones and an optional
/// birthday.
///
/// Phones may repeat. Every mutation validates its input before touching
/// the record, so a rejected value never leaves the record half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the phone list.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<()> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    ///
    /// Returns how many entries were removed; `0` means nothing matched.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        tracing::debug!(contact = %self.name, phone, removed, "Removed phone");
        removed
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated before any lookup, so a malformed replacement is
    /// rejected even when `old` is not on the record. Returns how many
    /// entries were replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<usize> {
        let replacement = Phone::new(new)?;

        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        tracing::debug!(contact = %self.name, old, new, replaced, "Edited phone");
        Ok(replaced)
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse `birthday` and store it, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> ValidationResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday {}", birthday)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_duplicates_in_order() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_untouched() {
        let mut record = john();
        let result = record.add_phone("123");

        assert_eq!(result, Err(ValidationError::InvalidPhone("123".to_string())));
        assert_eq!(record, john());
    }

    #[test]
    fn test_remove_phone_removes_every_match() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.remove_phone("1234567890"), 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = john();
        assert_eq!(record.remove_phone("0000000000"), 0);
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone() {
        let mut record = john();
        assert_eq!(record.edit_phone("1234567890", "1112223333"), Ok(1));
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_edit_missing_phone_is_noop() {
        let mut record = john();
        assert_eq!(record.edit_phone("0000000000", "1112223333"), Ok(0));
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_rejects_invalid_replacement() {
        let mut record = john();
        let result = record.edit_phone("1234567890", "111");

        assert_eq!(result, Err(ValidationError::InvalidPhone("111".to_string())));
        assert_eq!(record, john());
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        assert_eq!(
            record.find_phone("5555555555").map(Phone::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = john();
        record.add_birthday("15.4.1990").unwrap();
        record.add_birthday("01.01.2000").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.2000");
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = john();
        record.add_birthday("15.4.1990").unwrap();

        let result = record.add_birthday("1990-04-15");
        assert!(matches!(result, Err(ValidationError::InvalidBirthdayFormat(_))));
        assert_eq!(record.birthday().unwrap().to_string(), "15.04.1990");
    }

    #[test]
    fn test_record_display() {
        let mut record = john();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );

        record.add_birthday("15.4.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday 15.04.1990"
        );
    }

    #[test]
    fn test_record_display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = john();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","phones":["1234567890","5555555555"]}"#
        );

        record.add_birthday("15.4.1990").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"John","phones":["123"]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
