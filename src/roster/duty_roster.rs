//! In-memory duty roster.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{DutyRecord, DutyShare, YearMonth};

type MonthDuties = BTreeMap<NaiveDate, DutyShare>;

/// Registered employees and their duties, keyed by employee and month.
///
/// Each employee holds at most one duty per calendar date. Adding a duty on
/// a date that already has one replaces its share.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::models::{DutyShare, YearMonth};
/// use duty_bonus_engine::roster::DutyRoster;
/// use chrono::NaiveDate;
///
/// let mut roster = DutyRoster::new();
/// roster.add_employee("Anna Schmidt");
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
/// roster.add_duty("Anna Schmidt", date, DutyShare::Full).unwrap();
/// roster.add_duty("Anna Schmidt", date, DutyShare::Half).unwrap();
///
/// let duties = roster.duties_for_month("Anna Schmidt", YearMonth::from_date(date));
/// assert_eq!(duties.len(), 1);
/// assert_eq!(duties[0].share, DutyShare::Half);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyRoster {
    employees: BTreeSet<String>,
    duties: BTreeMap<String, BTreeMap<YearMonth, MonthDuties>>,
}

/// The exchange format of a roster.
///
/// ```json
/// {
///   "employees": ["Anna Schmidt"],
///   "duties": { "Anna Schmidt": { "2025-11": [{ "date": "2025-11-22", "share": "1.0" }] } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Registered employee identifiers, sorted.
    #[serde(default)]
    pub employees: Vec<String>,
    /// Duties per employee per month, sorted by date.
    #[serde(default)]
    pub duties: BTreeMap<String, BTreeMap<YearMonth, Vec<DutyRecord>>>,
}

impl DutyRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee.
    ///
    /// Returns false if the employee is already registered.
    pub fn add_employee(&mut self, employee_id: impl Into<String>) -> bool {
        let employee_id = employee_id.into();
        let added = self.employees.insert(employee_id.clone());
        if added {
            debug!(employee_id = %employee_id, "Added employee");
        }
        added
    }

    /// Removes an employee together with all of their duties.
    ///
    /// Returns false if the employee was not registered.
    pub fn remove_employee(&mut self, employee_id: &str) -> bool {
        let removed = self.employees.remove(employee_id);
        self.duties.remove(employee_id);
        if removed {
            debug!(employee_id = %employee_id, "Removed employee and their duties");
        }
        removed
    }

    /// Registered employees in name order.
    pub fn employees(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(String::as_str)
    }

    /// Whether the employee is registered.
    pub fn contains_employee(&self, employee_id: &str) -> bool {
        self.employees.contains(employee_id)
    }

    /// Records a duty, replacing any duty the employee already has on `date`.
    pub fn add_duty(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        share: DutyShare,
    ) -> EngineResult<()> {
        if !self.employees.contains(employee_id) {
            return Err(EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            });
        }

        let previous = self
            .duties
            .entry(employee_id.to_string())
            .or_default()
            .entry(YearMonth::from_date(date))
            .or_default()
            .insert(date, share);

        debug!(
            employee_id = %employee_id,
            date = %date,
            share = %share,
            replaced = previous.is_some(),
            "Recorded duty"
        );
        Ok(())
    }

    /// Removes the employee's duty on `date`.
    ///
    /// Returns false if there was none.
    pub fn remove_duty(&mut self, employee_id: &str, date: NaiveDate) -> bool {
        let period = YearMonth::from_date(date);
        let Some(months) = self.duties.get_mut(employee_id) else {
            return false;
        };
        let Some(month) = months.get_mut(&period) else {
            return false;
        };

        let removed = month.remove(&date).is_some();
        if month.is_empty() {
            months.remove(&period);
        }
        removed
    }

    /// The employee's duties in `period`, sorted by date.
    ///
    /// Unknown employees and empty months yield an empty list.
    pub fn duties_for_month(&self, employee_id: &str, period: YearMonth) -> Vec<DutyRecord> {
        self.duties
            .get(employee_id)
            .and_then(|months| months.get(&period))
            .map(|month| {
                month
                    .iter()
                    .map(|(&date, &share)| DutyRecord::new(date, share))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every registered employee's duties in `period`.
    ///
    /// Employees without duties that month map to an empty list.
    pub fn all_employee_duties_for_month(
        &self,
        period: YearMonth,
    ) -> BTreeMap<String, Vec<DutyRecord>> {
        self.employees
            .iter()
            .map(|employee| (employee.clone(), self.duties_for_month(employee, period)))
            .collect()
    }

    /// Removes every employee and duty.
    pub fn clear(&mut self) {
        self.employees.clear();
        self.duties.clear();
        info!("Cleared duty roster");
    }

    /// Captures the roster in its exchange format.
    pub fn snapshot(&self) -> RosterSnapshot {
        let duties = self
            .duties
            .iter()
            .map(|(employee, months)| {
                let months = months
                    .iter()
                    .filter(|(_, month)| !month.is_empty())
                    .map(|(&period, month)| {
                        let records = month
                            .iter()
                            .map(|(&date, &share)| DutyRecord::new(date, share))
                            .collect();
                        (period, records)
                    })
                    .collect();
                (employee.clone(), months)
            })
            .collect();

        RosterSnapshot {
            employees: self.employees.iter().cloned().collect(),
            duties,
        }
    }

    /// Rebuilds a roster from a snapshot.
    ///
    /// Every duty must be filed under its own month, may appear only once per
    /// date, and must belong to a listed employee.
    pub fn from_snapshot(snapshot: RosterSnapshot) -> EngineResult<Self> {
        let mut roster = DutyRoster::new();
        for employee in snapshot.employees {
            roster.employees.insert(employee);
        }

        for (employee, months) in snapshot.duties {
            if !roster.employees.contains(&employee) {
                return Err(EngineError::ImportError {
                    message: format!("duties listed for unknown employee '{}'", employee),
                });
            }

            let mut stored = BTreeMap::new();
            for (period, records) in months {
                let mut month = MonthDuties::new();
                for record in records {
                    if !period.contains(record.date) {
                        return Err(EngineError::ImportError {
                            message: format!(
                                "duty on {} for '{}' is filed under {}",
                                record.date, employee, period
                            ),
                        });
                    }
                    if month.insert(record.date, record.share).is_some() {
                        return Err(EngineError::ImportError {
                            message: format!(
                                "duplicate duty on {} for '{}'",
                                record.date, employee
                            ),
                        });
                    }
                }
                if !month.is_empty() {
                    stored.insert(period, month);
                }
            }
            roster.duties.insert(employee, stored);
        }

        Ok(roster)
    }

    /// Serializes the roster as pretty-printed JSON.
    pub fn export_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|e| EngineError::ImportError {
            message: format!("failed to serialize roster: {}", e),
        })
    }

    /// Replaces the roster's contents with the data in `json`.
    ///
    /// On failure the roster is left unchanged.
    pub fn import_json(&mut self, json: &str) -> EngineResult<()> {
        let snapshot: RosterSnapshot = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Rejected roster import");
            EngineError::ImportError {
                message: e.to_string(),
            }
        })?;

        let imported = Self::from_snapshot(snapshot).inspect_err(|e| {
            warn!(error = %e, "Rejected roster import");
        })?;

        info!(
            employees = imported.employees.len(),
            "Imported duty roster"
        );
        *self = imported;
        Ok(())
    }
}
