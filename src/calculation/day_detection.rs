//! Day classification logic.
//!
//! This module decides whether a duty date is a qualifying day (Friday,
//! Saturday, Sunday, public holiday, or the day before a public holiday) and
//! produces the display label for a date.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::models::DutyRecord;

/// Why a date does or does not qualify for the weekend rate.
///
/// Variants are listed in label precedence order: a holiday that is also the
/// day before another holiday is reported as a holiday.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calculation::DayKind;
///
/// assert!(DayKind::Weekend.is_qualifying());
/// assert!(!DayKind::Normal.is_qualifying());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayKind {
    /// A public holiday.
    Holiday {
        /// The holiday's display name.
        name: String,
    },
    /// The calendar day immediately before a public holiday.
    DayBeforeHoliday,
    /// Friday, Saturday or Sunday.
    Weekend,
    /// Monday to Thursday with no holiday involvement.
    Normal,
}

impl DayKind {
    /// Returns true for every kind except [`DayKind::Normal`].
    pub fn is_qualifying(&self) -> bool {
        !matches!(self, DayKind::Normal)
    }
}

/// Returns true for the weekdays that always qualify: Friday, Saturday, Sunday.
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Determines whether a date is a qualifying day.
///
/// A pure disjunction: weekend day OR holiday OR day before a holiday.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calculation::is_qualifying_day;
/// use duty_bonus_engine::calendar::HolidayCalendar;
/// use duty_bonus_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![HolidayEntry::new(
///     NaiveDate::from_ymd_opt(2026, 5, 14).unwrap(),
///     "Christi Himmelfahrt",
/// )]);
///
/// // Wednesday before a Thursday holiday
/// assert!(is_qualifying_day(NaiveDate::from_ymd_opt(2026, 5, 13).unwrap(), &calendar));
/// // Plain Tuesday
/// assert!(!is_qualifying_day(NaiveDate::from_ymd_opt(2026, 5, 12).unwrap(), &calendar));
/// ```
pub fn is_qualifying_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    is_weekend_day(date.weekday())
        || calendar.is_holiday(date)
        || calendar.is_day_before_holiday(date)
}

/// Classifies a date into a [`DayKind`].
///
/// Holiday takes precedence over day-before-holiday, which takes precedence
/// over the weekend check. `classify_day(d, c).is_qualifying()` always equals
/// `is_qualifying_day(d, c)`.
pub fn classify_day(date: NaiveDate, calendar: &HolidayCalendar) -> DayKind {
    if let Some(name) = calendar.holiday_name(date) {
        DayKind::Holiday {
            name: name.to_string(),
        }
    } else if calendar.is_day_before_holiday(date) {
        DayKind::DayBeforeHoliday
    } else if is_weekend_day(date.weekday()) {
        DayKind::Weekend
    } else {
        DayKind::Normal
    }
}

/// Returns the display label for a date.
///
/// Used for display only, never for calculation.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calculation::day_type_label;
/// use duty_bonus_engine::calendar::HolidayCalendar;
/// use duty_bonus_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![HolidayEntry::new(
///     NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
///     "Tag der Deutschen Einheit",
/// )]);
///
/// assert_eq!(
///     day_type_label(NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(), &calendar),
///     "Public holiday (Tag der Deutschen Einheit)"
/// );
/// assert_eq!(
///     day_type_label(NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(), &calendar),
///     "Day before public holiday"
/// );
/// assert_eq!(
///     day_type_label(NaiveDate::from_ymd_opt(2026, 10, 6).unwrap(), &calendar),
///     "Tuesday"
/// );
/// ```
pub fn day_type_label(date: NaiveDate, calendar: &HolidayCalendar) -> String {
    label_for(date, &classify_day(date, calendar))
}

pub(crate) fn label_for(date: NaiveDate, kind: &DayKind) -> String {
    match kind {
        DayKind::Holiday { name } => format!("Public holiday ({})", name),
        DayKind::DayBeforeHoliday => "Day before public holiday".to_string(),
        DayKind::Weekend | DayKind::Normal => weekday_name(date.weekday()).to_string(),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A duty record paired with its day classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDuty {
    /// The duty as supplied by the caller.
    pub record: DutyRecord,
    /// The classification of the duty date.
    pub kind: DayKind,
}

impl ClassifiedDuty {
    /// Classifies a duty record against the calendar.
    pub fn classify(record: DutyRecord, calendar: &HolidayCalendar) -> Self {
        Self {
            kind: classify_day(record.date, calendar),
            record,
        }
    }

    /// Whether the duty falls on a qualifying day.
    pub fn is_qualifying(&self) -> bool {
        self.kind.is_qualifying()
    }

    /// Whether the duty counts towards the Friday pool.
    ///
    /// Only qualifying Fridays do. Every Friday qualifies, so this is the
    /// weekday check.
    pub fn is_friday(&self) -> bool {
        self.record.weekday() == Weekday::Fri
    }

    /// The duty units of the record.
    pub fn units(&self) -> Decimal {
        self.record.units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutyShare, HolidayEntry};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn nrw_2026() -> HolidayCalendar {
        HolidayCalendar::new(vec![
            HolidayEntry::new(make_date("2026-01-01"), "Neujahr"),
            HolidayEntry::new(make_date("2026-04-03"), "Karfreitag"),
            HolidayEntry::new(make_date("2026-04-06"), "Ostermontag"),
            HolidayEntry::new(make_date("2026-05-14"), "Christi Himmelfahrt"),
            HolidayEntry::new(make_date("2026-12-25"), "1. Weihnachtstag"),
            HolidayEntry::new(make_date("2026-12-26"), "2. Weihnachtstag"),
        ])
    }

    // ==========================================================================
    // DD-001: Monday to Thursday are normal days
    // ==========================================================================
    #[test]
    fn test_dd_001_monday_to_thursday_are_normal() {
        let calendar = nrw_2026();
        // 2026-01-12 is a Monday
        for date in ["2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15"] {
            assert!(!is_qualifying_day(make_date(date), &calendar), "{}", date);
            assert_eq!(classify_day(make_date(date), &calendar), DayKind::Normal);
        }
    }

    // ==========================================================================
    // DD-002: Friday, Saturday and Sunday qualify
    // ==========================================================================
    #[test]
    fn test_dd_002_friday_to_sunday_qualify() {
        let calendar = nrw_2026();
        for date in ["2026-01-16", "2026-01-17", "2026-01-18"] {
            assert!(is_qualifying_day(make_date(date), &calendar), "{}", date);
            assert_eq!(classify_day(make_date(date), &calendar), DayKind::Weekend);
        }
    }

    // ==========================================================================
    // DD-003: weekday holiday qualifies
    // ==========================================================================
    #[test]
    fn test_dd_003_thursday_holiday_qualifies() {
        let calendar = nrw_2026();
        // Christi Himmelfahrt 2026 is a Thursday
        let date = make_date("2026-05-14");
        assert_eq!(date.weekday(), Weekday::Thu);
        assert!(is_qualifying_day(date, &calendar));
        assert_eq!(
            classify_day(date, &calendar),
            DayKind::Holiday {
                name: "Christi Himmelfahrt".to_string()
            }
        );
    }

    // ==========================================================================
    // DD-004: day before a weekday holiday qualifies
    // ==========================================================================
    #[test]
    fn test_dd_004_wednesday_before_holiday_qualifies() {
        let calendar = nrw_2026();
        let date = make_date("2026-05-13");
        assert!(is_qualifying_day(date, &calendar));
        assert_eq!(classify_day(date, &calendar), DayKind::DayBeforeHoliday);
    }

    // ==========================================================================
    // DD-005: holiday label wins over day-before label
    // ==========================================================================
    #[test]
    fn test_dd_005_holiday_precedes_day_before_holiday() {
        let calendar = nrw_2026();
        // 25.12 is itself a holiday and the eve of 26.12
        assert_eq!(
            day_type_label(make_date("2026-12-25"), &calendar),
            "Public holiday (1. Weihnachtstag)"
        );
        assert_eq!(
            day_type_label(make_date("2026-12-24"), &calendar),
            "Day before public holiday"
        );
    }

    #[test]
    fn test_day_before_label_wins_over_weekday() {
        let calendar = nrw_2026();
        // Sunday 2026-04-05 is the day before Ostermontag
        assert_eq!(
            day_type_label(make_date("2026-04-05"), &calendar),
            "Day before public holiday"
        );
    }

    #[test]
    fn test_weekday_labels() {
        let calendar = HolidayCalendar::default();
        assert_eq!(day_type_label(make_date("2026-01-16"), &calendar), "Friday");
        assert_eq!(day_type_label(make_date("2026-01-17"), &calendar), "Saturday");
        assert_eq!(day_type_label(make_date("2026-01-18"), &calendar), "Sunday");
        assert_eq!(day_type_label(make_date("2026-01-19"), &calendar), "Monday");
    }

    #[test]
    fn test_classification_agrees_with_predicate_for_a_year() {
        let calendar = nrw_2026();
        let mut date = make_date("2026-01-01");
        while date.year() == 2026 {
            assert_eq!(
                classify_day(date, &calendar).is_qualifying(),
                is_qualifying_day(date, &calendar),
                "{}",
                date
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_uncovered_year_falls_back_to_weekday_rule() {
        let calendar = nrw_2026();
        // 2040-01-02 is a Monday; no 2040 holidays are loaded
        let date = make_date("2040-01-02");
        assert!(!is_qualifying_day(date, &calendar));
    }

    #[test]
    fn test_classified_duty_friday_flag() {
        let calendar = nrw_2026();
        let friday = ClassifiedDuty::classify(
            DutyRecord::new(make_date("2026-01-16"), DutyShare::Half),
            &calendar,
        );
        assert!(friday.is_friday());
        assert!(friday.is_qualifying());
        assert_eq!(friday.units(), Decimal::new(5, 1));

        // Good Friday is a holiday but still a Friday
        let good_friday = ClassifiedDuty::classify(
            DutyRecord::new(make_date("2026-04-03"), DutyShare::Full),
            &calendar,
        );
        assert!(good_friday.is_friday());
        assert!(matches!(good_friday.kind, DayKind::Holiday { .. }));
    }

    #[test]
    fn test_day_kind_serialization() {
        let json = serde_json::to_string(&DayKind::Holiday {
            name: "Neujahr".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"holiday","name":"Neujahr"}"#);

        let json = serde_json::to_string(&DayKind::DayBeforeHoliday).unwrap();
        assert_eq!(json, r#"{"kind":"day_before_holiday"}"#);

        let deserialized: DayKind = serde_json::from_str(r#"{"kind":"weekend"}"#).unwrap();
        assert_eq!(deserialized, DayKind::Weekend);
    }
}
