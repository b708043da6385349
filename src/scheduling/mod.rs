//! Birthday congratulation scheduling.
//!
//! - **congratulation**: date arithmetic from a birth date to the observed
//!   business day
//! - **report**: grouping records into the upcoming-week report

pub mod congratulation;
pub mod report;

pub use congratulation::{
    anniversary_in, next_birthday, observed_congratulation_date, shift_to_business_day,
};
pub use report::{CongratulationDay, WeeklyReport, WEEK_DAYS};
