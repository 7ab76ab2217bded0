//! Core data models for the Duty Bonus Engine.
//!
//! This module contains the domain models used throughout the engine.

mod duty;
mod holiday;
mod monthly_result;
mod report;

pub use duty::{DutyRecord, DutyShare, YearMonth};
pub use holiday::HolidayEntry;
pub use monthly_result::{DutyDetail, MonthlyResult};
pub use report::OrganizationReport;
