//! Duty Bonus Engine for on-call duty rosters
//!
//! This crate computes monthly on-call duty bonuses: it classifies duty dates
//! as qualifying (Friday to Sunday, public holidays and their eves) or normal
//! using a configurable holiday calendar, applies the qualifying threshold and
//! the Friday-first deduction, and prices the remaining duty units.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
