//! Configuration types for the duty bonus scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

/// Metadata about the bonus scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier of the scheme (e.g., "NRW-ONCALL").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The jurisdiction whose public holidays apply (e.g., "DE-NW").
    pub jurisdiction: String,
    /// ISO currency code the rates are expressed in.
    pub currency: String,
}

/// The payout constants of the bonus scheme, from bonus.yaml.
///
/// Rates are currency per duty unit; the threshold and deduction are duty
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRules {
    /// Rate per unit on non-qualifying days.
    pub rate_normal: Decimal,
    /// Rate per unit on qualifying days.
    pub rate_weekend: Decimal,
    /// Qualifying units required before any bonus is paid (inclusive).
    pub min_qualifying_days: Decimal,
    /// Qualifying units deducted once the threshold is reached.
    pub deduction_amount: Decimal,
}

impl BonusRules {
    /// Checks that the rules describe a payable scheme.
    ///
    /// All values must be non-negative, and the deduction may not exceed the
    /// threshold; otherwise a month that just reaches the threshold could not
    /// absorb the full deduction.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("rate_normal", self.rate_normal),
            ("rate_weekend", self.rate_weekend),
            ("min_qualifying_days", self.min_qualifying_days),
            ("deduction_amount", self.deduction_amount),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.deduction_amount > self.min_qualifying_days {
            return Err(EngineError::InvalidConfig {
                field: "deduction_amount".to_string(),
                message: format!(
                    "must not exceed min_qualifying_days ({} > {})",
                    self.deduction_amount, self.min_qualifying_days
                ),
            });
        }

        Ok(())
    }
}

/// One holiday file, holidays/<year>.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayYearConfig {
    /// The year the file covers.
    pub year: i32,
    /// Holidays of that year.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// The complete scheme configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct BonusConfig {
    metadata: SchemeMetadata,
    rules: BonusRules,
    calendar: Arc<HolidayCalendar>,
}

impl BonusConfig {
    /// Creates a new BonusConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rules: BonusRules, calendar: HolidayCalendar) -> Self {
        Self {
            metadata,
            rules,
            calendar: Arc::new(calendar),
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the payout rules.
    pub fn rules(&self) -> &BonusRules {
        &self.rules
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &Arc<HolidayCalendar> {
        &self.calendar
    }
}
