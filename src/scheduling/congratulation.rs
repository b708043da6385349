//! Congratulation date arithmetic.
//!
//! Pure functions mapping a birth date and a reference "today" onto the
//! business day on which the contact should be congratulated. None of them
//! read the clock; callers always pass `today` in.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The birthday's anniversary in `year`.
///
/// February 29 falls on March 1 in years without one. Returns `None` only
/// when `year` is outside the calendar range chrono can represent.
pub fn anniversary_in(year: i32, birth_date: NaiveDate) -> Option<NaiveDate> {
    birth_date
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The first anniversary of `birth_date` on or after `today`.
///
/// A birthday falling on `today` itself is not pushed to next year.
pub fn next_birthday(today: NaiveDate, birth_date: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(today.year(), birth_date)?;
    if this_year < today {
        anniversary_in(today.year() + 1, birth_date)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
///
/// Monday through Friday are returned unchanged.
pub fn shift_to_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(offset))
}

/// The observed congratulation date: the next birthday, moved off the
/// weekend. Always on or after `today` and always Monday to Friday.
pub fn observed_congratulation_date(today: NaiveDate, birth_date: NaiveDate) -> Option<NaiveDate> {
    next_birthday(today, birth_date).and_then(shift_to_business_day)
}
