//! Public holiday model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A public holiday in the holiday calendar.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayEntry {
///     date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
///     name: "Tag der Deutschen Einheit".to_string(),
/// };
/// assert_eq!(holiday.year(), 2026);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The display name of the public holiday.
    pub name: String,
}

impl HolidayEntry {
    /// Creates a new holiday entry.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Returns the year bucket this holiday belongs to.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
