//! Monthly bonus calculation.
//!
//! This module provides the [`BonusEngine`], which turns one employee's
//! duties for a month into a [`MonthlyResult`]:
//!
//! 1. classify every duty date and sum shares into the Friday, other
//!    qualifying, and normal pools
//! 2. gate on the qualifying threshold (inclusive); below it nothing is paid
//! 3. deduct the fixed deduction from the Friday pool first, then the rest
//! 4. price normal and remaining qualifying units at their rates

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::HolidayCalendar;
use crate::config::BonusRules;
use crate::models::{DutyDetail, DutyRecord, MonthlyResult, OrganizationReport, YearMonth};

use super::day_detection::label_for;
use super::{
    ClassifiedDuty, DayKind, DeductionSplit, DutyAllocation, allocate_deduction, classify_day,
    day_type_label, is_qualifying_day, split_deduction,
};

/// Running pool totals of one month's duties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PoolTotals {
    friday: Decimal,
    other: Decimal,
    normal: Decimal,
}

impl PoolTotals {
    fn add(&mut self, duty: &ClassifiedDuty) {
        let units = duty.units();
        if !duty.is_qualifying() {
            self.normal += units;
        } else if duty.is_friday() {
            self.friday += units;
        } else {
            self.other += units;
        }
    }

    fn qualifying(&self) -> Decimal {
        self.friday + self.other
    }
}

/// Computes duty bonuses from a fixed rule set and holiday calendar.
///
/// The engine holds only immutable configuration, so a single instance can
/// be shared across threads and evaluated for any number of employees in any
/// order.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::calculation::BonusEngine;
/// use duty_bonus_engine::calendar::HolidayCalendar;
/// use duty_bonus_engine::config::BonusRules;
/// use duty_bonus_engine::models::{DutyRecord, DutyShare};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = BonusRules {
///     rate_normal: Decimal::from(250),
///     rate_weekend: Decimal::from(450),
///     min_qualifying_days: Decimal::from_str("2.0").unwrap(),
///     deduction_amount: Decimal::from_str("2.0").unwrap(),
/// };
/// let engine = BonusEngine::new(rules, HolidayCalendar::default());
///
/// // Friday, Saturday, Sunday: 3.0 qualifying units, 2.0 deducted, 1.0 paid
/// let duties: Vec<DutyRecord> = [16, 17, 18]
///     .iter()
///     .map(|&day| DutyRecord::new(NaiveDate::from_ymd_opt(2026, 1, day).unwrap(), DutyShare::Full))
///     .collect();
///
/// let result = engine.calculate_monthly_bonus(&duties);
/// assert!(result.threshold_reached);
/// assert_eq!(result.total_bonus, Decimal::from(450));
/// ```
#[derive(Debug, Clone)]
pub struct BonusEngine {
    rules: BonusRules,
    calendar: Arc<HolidayCalendar>,
}

impl BonusEngine {
    /// Creates an engine from payout rules and a holiday calendar.
    pub fn new(rules: BonusRules, calendar: impl Into<Arc<HolidayCalendar>>) -> Self {
        Self {
            rules,
            calendar: calendar.into(),
        }
    }

    /// Returns the payout rules.
    pub fn rules(&self) -> &BonusRules {
        &self.rules
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Whether `date` is a qualifying day under this engine's calendar.
    pub fn is_qualifying_day(&self, date: NaiveDate) -> bool {
        is_qualifying_day(date, &self.calendar)
    }

    /// Classifies `date` under this engine's calendar.
    pub fn classify_day(&self, date: NaiveDate) -> DayKind {
        classify_day(date, &self.calendar)
    }

    /// Display label for `date` under this engine's calendar.
    pub fn day_type_label(&self, date: NaiveDate) -> String {
        day_type_label(date, &self.calendar)
    }

    /// Calculates the bonus for one employee's duties in one month.
    ///
    /// The duties are taken as given: the caller guarantees at most one
    /// record per date. An empty slice yields [`MonthlyResult::empty`].
    pub fn calculate_monthly_bonus(&self, duties: &[DutyRecord]) -> MonthlyResult {
        if duties.is_empty() {
            return MonthlyResult::empty();
        }

        let classified: Vec<ClassifiedDuty> = duties
            .iter()
            .map(|duty| ClassifiedDuty::classify(*duty, &self.calendar))
            .collect();

        let mut pools = PoolTotals::default();
        for duty in &classified {
            pools.add(duty);
        }

        let qualifying_days = pools.qualifying();
        let threshold_reached = qualifying_days >= self.rules.min_qualifying_days;

        let (split, allocations) = if threshold_reached {
            let split = split_deduction(self.rules.deduction_amount, pools.friday);
            (split, allocate_deduction(&classified, split))
        } else {
            (
                DeductionSplit::NONE,
                vec![DutyAllocation::UNPAID; classified.len()],
            )
        };

        let (normal_days_paid, qualifying_days_paid) = if threshold_reached {
            let friday_paid = (pools.friday - split.from_friday).max(Decimal::ZERO);
            let other_paid = (pools.other - split.from_other).max(Decimal::ZERO);
            (pools.normal, friday_paid + other_paid)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        let bonus_normal_days = normal_days_paid * self.rules.rate_normal;
        let bonus_qualifying_days = qualifying_days_paid * self.rules.rate_weekend;
        let total_bonus = bonus_normal_days + bonus_qualifying_days;

        let duty_details = classified
            .into_iter()
            .zip(allocations)
            .map(|(duty, allocation)| self.detail(duty, allocation, threshold_reached))
            .collect();

        debug!(
            duties = duties.len(),
            qualifying_days = %qualifying_days,
            normal_days = %pools.normal,
            threshold_reached,
            deduction_source = ?split.source(),
            total_bonus = %total_bonus,
            "Calculated monthly bonus"
        );

        MonthlyResult {
            total_duties: duties.len(),
            total_days_worked: qualifying_days + pools.normal,
            normal_days: pools.normal,
            qualifying_days_friday: pools.friday,
            qualifying_days_other: pools.other,
            qualifying_days,
            threshold_reached,
            deduction_from_friday: split.from_friday,
            deduction_from_other: split.from_other,
            qualifying_days_deducted: split.total(),
            deduction_source: split.source(),
            normal_days_paid,
            qualifying_days_paid,
            bonus_normal_days,
            bonus_qualifying_days,
            total_bonus,
            duty_details,
        }
    }

    /// Calculates every employee's bonus independently.
    ///
    /// There is no shared threshold or deduction pool between employees.
    pub fn calculate_all_employees(
        &self,
        employee_duties: &BTreeMap<String, Vec<DutyRecord>>,
    ) -> BTreeMap<String, MonthlyResult> {
        employee_duties
            .iter()
            .map(|(employee, duties)| (employee.clone(), self.calculate_monthly_bonus(duties)))
            .collect()
    }

    /// Builds the organization-wide report for one month.
    pub fn organization_report(
        &self,
        period: YearMonth,
        employee_duties: &BTreeMap<String, Vec<DutyRecord>>,
    ) -> OrganizationReport {
        OrganizationReport::new(period, self.calculate_all_employees(employee_duties))
    }

    fn detail(
        &self,
        duty: ClassifiedDuty,
        allocation: DutyAllocation,
        threshold_reached: bool,
    ) -> DutyDetail {
        let is_qualifying = duty.is_qualifying();
        let rate = if is_qualifying {
            self.rules.rate_weekend
        } else {
            self.rules.rate_normal
        };
        let units = duty.units();

        DutyDetail {
            date: duty.record.date,
            weekday: duty.record.weekday(),
            share: duty.record.share,
            label: label_for(duty.record.date, &duty.kind),
            day_kind: duty.kind,
            is_qualifying,
            deducted: allocation.deducted,
            paid: allocation.paid,
            amount: allocation.paid * rate,
            fully_deducted: threshold_reached && is_qualifying && allocation.deducted >= units,
        }
    }
}
