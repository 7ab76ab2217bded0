//! Configuration loading and management for the Duty Bonus Engine.
//!
//! This module loads a bonus scheme from YAML files: the scheme metadata,
//! the payout rules, and the public holiday table per year. Nothing about
//! rates or holidays is compiled in.
//!
//! # Example
//!
//! ```no_run
//! use duty_bonus_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nrw").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusConfig, BonusRules, HolidayYearConfig, SchemeMetadata};
