//! Deduction allocation.
//!
//! Once the monthly threshold is reached a fixed number of qualifying units
//! is deducted before payout. The deduction is taken from Friday units first
//! and only the remainder from other qualifying units. This module computes
//! both the pool-level split and the per-duty allocation as pure functions.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClassifiedDuty;

/// Which qualifying pool absorbed the monthly deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionSource {
    /// No deduction applied (threshold not reached).
    None,
    /// The deduction came entirely from Friday units.
    Friday,
    /// Friday units were exhausted and other qualifying units covered the rest.
    FridayAndOther,
    /// No Friday units were available; other qualifying units covered it.
    Other,
}

/// The pool-level split of the monthly deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSplit {
    /// Units deducted from qualifying Fridays.
    pub from_friday: Decimal,
    /// Units deducted from other qualifying days.
    pub from_other: Decimal,
}

impl DeductionSplit {
    /// The split used when no deduction applies.
    pub const NONE: DeductionSplit = DeductionSplit {
        from_friday: Decimal::ZERO,
        from_other: Decimal::ZERO,
    };

    /// Total deducted units.
    pub fn total(&self) -> Decimal {
        self.from_friday + self.from_other
    }

    /// Describes which pool the deduction was taken from.
    pub fn source(&self) -> DeductionSource {
        let from_friday = self.from_friday > Decimal::ZERO;
        let from_other = self.from_other > Decimal::ZERO;
        match (from_friday, from_other) {
            (false, false) => DeductionSource::None,
            (true, false) => DeductionSource::Friday,
            (true, true) => DeductionSource::FridayAndOther,
            (false, true) => DeductionSource::Other,
        }
    }
}

/// Splits the deduction between the Friday pool and the other pool.
///
/// `from_friday = min(deduction, friday_units)` and
/// `from_other = max(0, deduction - from_friday)`.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calculation::split_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_deduction(Decimal::from_str("2.0").unwrap(), Decimal::from_str("0.5").unwrap());
/// assert_eq!(split.from_friday, Decimal::from_str("0.5").unwrap());
/// assert_eq!(split.from_other, Decimal::from_str("1.5").unwrap());
/// ```
pub fn split_deduction(deduction_amount: Decimal, friday_units: Decimal) -> DeductionSplit {
    let from_friday = deduction_amount.min(friday_units).max(Decimal::ZERO);
    let from_other = (deduction_amount - from_friday).max(Decimal::ZERO);

    DeductionSplit {
        from_friday,
        from_other,
    }
}

/// How one duty is settled after the deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyAllocation {
    /// Units of the duty absorbed by the deduction.
    pub deducted: Decimal,
    /// Units of the duty paid out.
    pub paid: Decimal,
}

impl DutyAllocation {
    /// Allocation of a duty that earns nothing.
    pub const UNPAID: DutyAllocation = DutyAllocation {
        deducted: Decimal::ZERO,
        paid: Decimal::ZERO,
    };
}

/// Distributes a deduction split across individual duties.
///
/// Friday duties draw down the Friday share of the deduction and other
/// qualifying duties draw down the other share. Within a pool duties are
/// visited by weekday, Monday through Sunday, and by date within a weekday.
/// Normal duties are never deducted. The returned allocations are in the same
/// order as `duties`.
///
/// Per pool, the deducted units sum to the pool's share of the split as long
/// as the pool holds at least that many units.
pub fn allocate_deduction(duties: &[ClassifiedDuty], split: DeductionSplit) -> Vec<DutyAllocation> {
    let mut order: Vec<usize> = (0..duties.len()).collect();
    order.sort_by_key(|&i| {
        let date = duties[i].record.date;
        (date.weekday().num_days_from_monday(), date)
    });

    let mut remaining_friday = split.from_friday;
    let mut remaining_other = split.from_other;
    let mut allocations = vec![DutyAllocation::UNPAID; duties.len()];

    for i in order {
        let duty = &duties[i];
        let units = duty.units();

        if !duty.is_qualifying() {
            allocations[i] = DutyAllocation {
                deducted: Decimal::ZERO,
                paid: units,
            };
            continue;
        }

        let remaining = if duty.is_friday() {
            &mut remaining_friday
        } else {
            &mut remaining_other
        };
        let deducted = units.min(*remaining);
        *remaining -= deducted;

        allocations[i] = DutyAllocation {
            deducted,
            paid: units - deducted,
        };
    }

    allocations
}
