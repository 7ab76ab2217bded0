//! Year-bucketed public holiday lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

/// An immutable table of public holidays for a jurisdiction.
///
/// Holidays are bucketed by year; a lookup finds the year bucket and then
/// matches the exact date within it. Years without a bucket are treated as
/// having no holidays, so dates outside [`covered_years`](Self::covered_years)
/// silently classify as ordinary days. Callers that care should check
/// [`covers`](Self::covers).
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calendar::HolidayCalendar;
/// use duty_bonus_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let calendar = HolidayCalendar::new(vec![HolidayEntry::new(new_year, "Neujahr")]);
///
/// assert!(calendar.is_holiday(new_year));
/// assert!(calendar.is_day_before_holiday(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
/// assert_eq!(calendar.holiday_name(new_year), Some("Neujahr"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    by_year: BTreeMap<i32, Vec<HolidayEntry>>,
}

impl HolidayCalendar {
    /// Builds a calendar from a flat list of holidays.
    ///
    /// Entries are bucketed by their own year and sorted by date. If two
    /// entries share a date the first one wins.
    pub fn new(entries: impl IntoIterator<Item = HolidayEntry>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<HolidayEntry>> = BTreeMap::new();
        for entry in entries {
            let bucket = by_year.entry(entry.year()).or_default();
            if !bucket.iter().any(|h| h.date == entry.date) {
                bucket.push(entry);
            }
        }
        for bucket in by_year.values_mut() {
            bucket.sort_by_key(|h| h.date);
        }
        Self { by_year }
    }

    /// Builds a calendar from explicit year buckets, as loaded from configuration.
    ///
    /// A year listed with no holidays still counts as covered. Returns an
    /// error if a year is declared twice, if an entry is filed under a
    /// different year than its date, or if a date appears twice.
    pub fn from_years(years: impl IntoIterator<Item = (i32, Vec<HolidayEntry>)>) -> EngineResult<Self> {
        let mut by_year: BTreeMap<i32, Vec<HolidayEntry>> = BTreeMap::new();

        for (year, mut holidays) in years {
            if let Some(misfiled) = holidays.iter().find(|h| h.year() != year) {
                return Err(EngineError::InvalidConfig {
                    field: format!("holidays.{}", year),
                    message: format!(
                        "holiday '{}' on {} is filed under the wrong year",
                        misfiled.name, misfiled.date
                    ),
                });
            }

            holidays.sort_by_key(|h| h.date);
            if let Some(pair) = holidays.windows(2).find(|pair| pair[0].date == pair[1].date) {
                return Err(EngineError::InvalidConfig {
                    field: format!("holidays.{}", year),
                    message: format!("duplicate holiday date {}", pair[1].date),
                });
            }

            match by_year.entry(year) {
                Entry::Occupied(_) => {
                    return Err(EngineError::InvalidConfig {
                        field: format!("holidays.{}", year),
                        message: "year is declared more than once".to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(holidays);
                }
            }
        }

        Ok(Self { by_year })
    }

    /// Returns true if `date` is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.find(date).is_some()
    }

    /// Returns true if the day after `date` is a public holiday.
    ///
    /// Crosses month and year boundaries, so December 31 is the day before a
    /// January 1 holiday of the following year.
    pub fn is_day_before_holiday(&self, date: NaiveDate) -> bool {
        date.succ_opt().is_some_and(|next| self.is_holiday(next))
    }

    /// Returns the display name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.find(date).map(|h| h.name.as_str())
    }

    /// Returns all holidays of a year in date order; empty for uncovered years.
    pub fn holidays_for_year(&self, year: i32) -> &[HolidayEntry] {
        self.by_year.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the span of years the table was loaded for, if any.
    pub fn covered_years(&self) -> Option<RangeInclusive<i32>> {
        let first = *self.by_year.keys().next()?;
        let last = *self.by_year.keys().next_back()?;
        Some(first..=last)
    }

    /// Returns true if the table has a bucket for `year`.
    ///
    /// A year inside [`covered_years`](Self::covered_years) that was never
    /// loaded is not covered.
    pub fn covers_year(&self, year: i32) -> bool {
        self.by_year.contains_key(&year)
    }

    /// Returns true if the table has a bucket for the year of `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.covers_year(date.year())
    }

    /// Total number of holidays across all years.
    pub fn len(&self) -> usize {
        self.by_year.values().map(Vec::len).sum()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        self.by_year
            .get(&date.year())?
            .iter()
            .find(|h| h.date == date)
    }
}
