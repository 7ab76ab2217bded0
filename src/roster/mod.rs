//! Duty roster for the Duty Bonus Engine.
//!
//! The roster keeps the registered employees and their duties per month in
//! memory and exchanges them as JSON. It feeds the bonus engine but holds no
//! calculation logic of its own.

mod duty_roster;

pub use duty_roster::{DutyRoster, RosterSnapshot};
