//! Calculation logic for the Duty Bonus Engine.
//!
//! This module contains the day classification used to decide which duties
//! earn the weekend rate, the Friday-first deduction allocation, and the
//! [`BonusEngine`] that turns one month of duties into a payout breakdown.

mod day_detection;
mod deduction;
mod monthly_bonus;

pub use day_detection::{
    ClassifiedDuty, DayKind, classify_day, day_type_label, is_qualifying_day, is_weekend_day,
};
pub use deduction::{
    DeductionSource, DeductionSplit, DutyAllocation, allocate_deduction, split_deduction,
};
pub use monthly_bonus::BonusEngine;
