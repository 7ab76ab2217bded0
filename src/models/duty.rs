//! Duty record model and related types.
//!
//! This module defines the [`DutyShare`], [`DutyRecord`] and [`YearMonth`]
//! types used to describe the on-call duties an employee worked in a month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The fraction of a full duty shift worked on a date.
///
/// Only full and half shifts exist. Any other value is rejected when the
/// share is constructed, so the aggregation never sees an invalid share.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::DutyShare;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let half = DutyShare::try_from(Decimal::from_str("0.5").unwrap()).unwrap();
/// assert_eq!(half, DutyShare::Half);
/// assert!(DutyShare::try_from(Decimal::from_str("0.25").unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum DutyShare {
    /// A full duty shift (1.0 units).
    Full,
    /// A half duty shift (0.5 units).
    Half,
}

impl DutyShare {
    /// Returns the number of duty units this share contributes.
    pub fn units(self) -> Decimal {
        match self {
            DutyShare::Full => Decimal::new(10, 1),
            DutyShare::Half => Decimal::new(5, 1),
        }
    }
}

impl TryFrom<Decimal> for DutyShare {
    type Error = EngineError;

    fn try_from(share: Decimal) -> Result<Self, Self::Error> {
        if share == Decimal::ONE {
            Ok(DutyShare::Full)
        } else if share == Decimal::new(5, 1) {
            Ok(DutyShare::Half)
        } else {
            Err(EngineError::InvalidShare { share })
        }
    }
}

impl From<DutyShare> for Decimal {
    fn from(share: DutyShare) -> Self {
        share.units()
    }
}

impl fmt::Display for DutyShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}

/// A single on-call duty worked by an employee.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::{DutyRecord, DutyShare};
/// use chrono::{NaiveDate, Weekday};
///
/// let duty = DutyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), DutyShare::Full);
/// assert_eq!(duty.weekday(), Weekday::Sat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DutyRecord {
    /// The calendar date of the duty.
    pub date: NaiveDate,
    /// The fraction of a full shift worked.
    pub share: DutyShare,
}

impl DutyRecord {
    /// Creates a duty record from an already validated share.
    pub fn new(date: NaiveDate, share: DutyShare) -> Self {
        Self { date, share }
    }

    /// Creates a duty record from a raw share value.
    ///
    /// Returns [`EngineError::InvalidShare`] unless `share` is 1.0 or 0.5.
    pub fn try_new(date: NaiveDate, share: Decimal) -> EngineResult<Self> {
        Ok(Self {
            date,
            share: DutyShare::try_from(share)?,
        })
    }

    /// Returns the number of duty units this record contributes.
    pub fn units(&self) -> Decimal {
        self.share.units()
    }

    /// Returns the day of the week of the duty.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the month the duty belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// A calendar month, the unit duties are stored and settled in.
///
/// Serializes as `YYYY-MM` so it can be used as a JSON object key.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let month: YearMonth = "2026-02".parse().unwrap();
/// assert_eq!(month.to_string(), "2026-02");
/// assert!(month.contains(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()));
/// assert!(!month.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, returning an error if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidYearMonth {
                value: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Checks if a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidYearMonth {
            value: s.to_string(),
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
