//! Name-keyed store of contact records.

use crate::models::Record;
use crate::scheduling::{WeeklyReport, WEEK_DAYS};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// An in-memory address book.
///
/// Holds at most one record per name. Records are kept in insertion order;
/// overwriting a name keeps its original position. Not synchronized:
/// callers sharing a book across threads must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();

        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(contact = %name, "Overwrote existing record");
        } else {
            tracing::debug!(contact = %name, "Added record");
            self.order.push(name);
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// A missing name is not an error; `None` is returned and the book is
    /// left unchanged.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(contact = %name, "Deleted record");
        Some(removed)
    }

    /// Contacts to congratulate from `today` through the following six days.
    pub fn get_birthdays_per_week(&self, today: NaiveDate) -> WeeklyReport {
        self.upcoming_birthdays(today, WEEK_DAYS)
    }

    /// Contacts to congratulate within `days` days starting at `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> WeeklyReport {
        let report = WeeklyReport::build(self.records(), today, days);
        tracing::debug!(
            %today,
            days,
            congratulation_days = report.len(),
            "Built upcoming birthdays report"
        );
        report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
