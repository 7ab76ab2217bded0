//! Request types for the Duty Bonus Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/calculate/batch` endpoints, and turns them into validated duty records.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DutyRecord, YearMonth};

/// Request body for the `/calculate` endpoint.
///
/// Contains one employee's duties for a single month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Identifier of the employee the duties belong to.
    pub employee_id: String,
    /// The month being settled, as `YYYY-MM`.
    pub month: YearMonth,
    /// The duties worked during the month.
    #[serde(default)]
    pub duties: Vec<DutyRequest>,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The month being settled, as `YYYY-MM`.
    pub month: YearMonth,
    /// Duties per employee identifier.
    #[serde(default)]
    pub employees: BTreeMap<String, Vec<DutyRequest>>,
}

/// A duty as submitted by a client.
///
/// The share is taken as a raw number so an invalid value is reported as an
/// invalid share rather than a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyRequest {
    /// The calendar date of the duty.
    pub date: NaiveDate,
    /// The fraction of a full shift worked, 1.0 or 0.5.
    pub share: Decimal,
}

impl TryFrom<DutyRequest> for DutyRecord {
    type Error = EngineError;

    fn try_from(req: DutyRequest) -> Result<Self, Self::Error> {
        DutyRecord::try_new(req.date, req.share)
    }
}

/// Validates a month's duties and converts them to records.
///
/// Rejects invalid shares, dates outside `month`, and more than one duty on
/// the same date.
pub fn validate_duties(month: YearMonth, duties: Vec<DutyRequest>) -> EngineResult<Vec<DutyRecord>> {
    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(duties.len());

    for duty in duties {
        if !month.contains(duty.date) {
            return Err(EngineError::InvalidDuty {
                date: duty.date,
                message: format!("date is outside {}", month),
            });
        }
        if !seen.insert(duty.date) {
            return Err(EngineError::InvalidDuty {
                date: duty.date,
                message: "more than one duty on this date".to_string(),
            });
        }
        records.push(DutyRecord::try_from(duty)?);
    }

    Ok(records)
}

impl CalculationRequest {
    /// Validates the request's duties.
    pub fn into_records(self) -> EngineResult<Vec<DutyRecord>> {
        validate_duties(self.month, self.duties)
    }
}

impl BatchCalculationRequest {
    /// Validates every employee's duties.
    pub fn into_records(self) -> EngineResult<BTreeMap<String, Vec<DutyRecord>>> {
        let month = self.month;
        self.employees
            .into_iter()
            .map(|(employee, duties)| {
                validate_duties(month, duties).map(|records| (employee, records))
            })
            .collect()
    }
}
