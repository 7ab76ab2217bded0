//! Organization-wide monthly report model.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MonthlyResult, YearMonth};

/// Bonus results for every employee in one month.
///
/// Each employee's result is computed independently; there is no shared
/// threshold or deduction pool across employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationReport {
    /// The month the report covers.
    pub period: YearMonth,
    /// Results keyed by employee identifier, in name order.
    pub results: BTreeMap<String, MonthlyResult>,
    /// Sum of every employee's total bonus.
    pub total_bonus: Decimal,
    /// Number of employees who receive a bonus.
    pub employees_with_bonus: usize,
}

impl OrganizationReport {
    /// Builds a report from per-employee results, deriving the totals.
    pub fn new(period: YearMonth, results: BTreeMap<String, MonthlyResult>) -> Self {
        let total_bonus = results.values().map(|r| r.total_bonus).sum();
        let employees_with_bonus = results.values().filter(|r| r.has_bonus()).count();

        Self {
            period,
            results,
            total_bonus,
            employees_with_bonus,
        }
    }
}
