//! Monthly bonus result models.
//!
//! This module contains the [`MonthlyResult`] type and the per-duty
//! [`DutyDetail`] breakdown produced by the bonus engine for one employee
//! and one month. Results are derived on demand and never stored.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayKind, DeductionSource};

use super::DutyShare;

/// The classification and settlement of a single duty.
///
/// `deducted` and `paid` are duty units. `amount` is the currency value of
/// the paid units. When the monthly threshold is not reached nothing is paid,
/// so both `paid` and `amount` are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyDetail {
    /// The date of the duty.
    pub date: NaiveDate,
    /// The day of the week of the duty.
    pub weekday: Weekday,
    /// The fraction of a full shift worked.
    pub share: DutyShare,
    /// Why the day counts as qualifying, if it does.
    pub day_kind: DayKind,
    /// Display label for the day (holiday name, eve of holiday, or weekday).
    pub label: String,
    /// Whether the duty falls on a qualifying day.
    pub is_qualifying: bool,
    /// Units of this duty absorbed by the monthly deduction.
    pub deducted: Decimal,
    /// Units of this duty that are paid out.
    pub paid: Decimal,
    /// The currency amount paid for this duty.
    pub amount: Decimal,
    /// True when the whole duty was absorbed by the deduction.
    pub fully_deducted: bool,
}

/// The bonus breakdown for one employee in one month.
///
/// Invariants upheld by the engine:
/// - `qualifying_days == qualifying_days_friday + qualifying_days_other`
/// - `total_bonus` is zero whenever `threshold_reached` is false
/// - `deduction_from_friday + deduction_from_other == qualifying_days_deducted`
/// - paid units never exceed the corresponding pre-deduction totals
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::MonthlyResult;
/// use rust_decimal::Decimal;
///
/// let result = MonthlyResult::empty();
/// assert!(!result.threshold_reached);
/// assert_eq!(result.total_bonus, Decimal::ZERO);
/// assert!(result.duty_details.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// Number of duty records considered.
    pub total_duties: usize,
    /// Sum of all duty shares, qualifying and normal.
    pub total_days_worked: Decimal,
    /// Units worked on non-qualifying days.
    pub normal_days: Decimal,
    /// Units worked on qualifying Fridays.
    pub qualifying_days_friday: Decimal,
    /// Units worked on qualifying days other than Friday.
    pub qualifying_days_other: Decimal,
    /// All qualifying units.
    pub qualifying_days: Decimal,
    /// Whether the qualifying units met the monthly threshold.
    pub threshold_reached: bool,
    /// Deducted units taken from Friday duties.
    pub deduction_from_friday: Decimal,
    /// Deducted units taken from other qualifying duties.
    pub deduction_from_other: Decimal,
    /// Total deducted units.
    pub qualifying_days_deducted: Decimal,
    /// Which pool absorbed the deduction.
    pub deduction_source: DeductionSource,
    /// Normal units paid out.
    pub normal_days_paid: Decimal,
    /// Qualifying units paid out after the deduction.
    pub qualifying_days_paid: Decimal,
    /// Currency amount for normal units.
    pub bonus_normal_days: Decimal,
    /// Currency amount for qualifying units.
    pub bonus_qualifying_days: Decimal,
    /// Total bonus for the month.
    pub total_bonus: Decimal,
    /// Per-duty breakdown, in input order.
    pub duty_details: Vec<DutyDetail>,
}

impl MonthlyResult {
    /// Returns the canonical zero result used for a month without duties.
    pub fn empty() -> Self {
        Self {
            total_duties: 0,
            total_days_worked: Decimal::ZERO,
            normal_days: Decimal::ZERO,
            qualifying_days_friday: Decimal::ZERO,
            qualifying_days_other: Decimal::ZERO,
            qualifying_days: Decimal::ZERO,
            threshold_reached: false,
            deduction_from_friday: Decimal::ZERO,
            deduction_from_other: Decimal::ZERO,
            qualifying_days_deducted: Decimal::ZERO,
            deduction_source: DeductionSource::None,
            normal_days_paid: Decimal::ZERO,
            qualifying_days_paid: Decimal::ZERO,
            bonus_normal_days: Decimal::ZERO,
            bonus_qualifying_days: Decimal::ZERO,
            total_bonus: Decimal::ZERO,
            duty_details: Vec::new(),
        }
    }

    /// Returns true if any bonus is paid for the month.
    pub fn has_bonus(&self) -> bool {
        self.total_bonus > Decimal::ZERO
    }
}

impl Default for MonthlyResult {
    fn default() -> Self {
        Self::empty()
    }
}
