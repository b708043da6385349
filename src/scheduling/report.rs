//! Upcoming congratulations grouped by day.

use super::congratulation::observed_congratulation_date;
use crate::models::Record;
use chrono::{Days, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Length of the weekly window, `today` included.
pub const WEEK_DAYS: u32 = 7;

/// Contacts to congratulate on one business day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CongratulationDay {
    date: NaiveDate,
    names: Vec<String>,
}

impl CongratulationDay {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Contact names in the order the store was scanned.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Full English weekday name, e.g. "Monday".
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

impl fmt::Display for CongratulationDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.weekday_name(), self.names.join(", "))
    }
}

impl Serialize for CongratulationDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CongratulationDay", 3)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("weekday", &self.weekday_name())?;
        state.serialize_field("names", &self.names)?;
        state.end()
    }
}

/// Congratulation days inside a window, in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeeklyReport {
    days: Vec<CongratulationDay>,
}

impl WeeklyReport {
    /// Group `records` by observed congratulation date.
    ///
    /// Only dates in `[today, today + window_days - 1]` are kept. Records
    /// without a birthday are skipped. Grouping is keyed by the date itself
    /// so the output is chronological regardless of weekday names.
    pub fn build<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let Some(last_day) = window_days
            .checked_sub(1)
            .and_then(|span| today.checked_add_days(Days::new(u64::from(span))))
        else {
            return Self::default();
        };

        let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for record in records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let Some(observed) = observed_congratulation_date(today, birthday.date()) else {
                tracing::warn!(
                    contact = %record.name(),
                    birthday = %birthday,
                    "Cannot project birthday relative to {}",
                    today
                );
                continue;
            };

            tracing::trace!(contact = %record.name(), %observed, "Observed congratulation date");

            if observed <= last_day {
                by_date
                    .entry(observed)
                    .or_default()
                    .push(record.name().as_str().to_string());
            }
        }

        let days = by_date
            .into_iter()
            .map(|(date, names)| CongratulationDay { date, names })
            .collect();

        Self { days }
    }

    pub fn days(&self) -> &[CongratulationDay] {
        &self.days
    }

    pub fn into_days(self) -> Vec<CongratulationDay> {
        self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

impl fmt::Display for WeeklyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", day)?;
        }
        Ok(())
    }
}
