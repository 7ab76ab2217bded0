//! Response types for the Duty Bonus Engine API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayKind;
use crate::error::EngineError;
use crate::models::{HolidayEntry, MonthlyResult, OrganizationReport, YearMonth};

/// Response body of `/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee the result belongs to.
    pub employee_id: String,
    /// The settled month.
    pub month: YearMonth,
    /// The payout breakdown.
    pub result: MonthlyResult,
}

/// Response body of `/calculate/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Per-employee results and totals.
    pub report: OrganizationReport,
}

/// Response body of `/holidays/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The requested year.
    pub year: i32,
    /// Whether the loaded holiday table covers the year at all.
    pub covered: bool,
    /// The year's holidays in date order.
    pub holidays: Vec<HolidayEntry>,
}

/// Response body of `/classify/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    /// The classified date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Why the date does or does not qualify.
    pub day_kind: DayKind,
    /// Display label.
    pub label: String,
    /// Whether duties on this date earn the weekend rate.
    pub is_qualifying: bool,
    /// Whether the loaded holiday table covers the date's year.
    pub covered: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error for a path segment that is not a valid date or year.
    pub fn invalid_path(value: &str, expected: &str) -> Self {
        Self::with_details(
            "INVALID_PATH_PARAMETER",
            format!("Invalid path parameter: {}", value),
            format!("Expected {}", expected),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidShare { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_SHARE",
                    message,
                    "Each duty must be a full (1.0) or half (0.5) shift",
                ),
            ),
            EngineError::InvalidDuty { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DUTY",
                    message,
                    "Duties must fall within the requested month, one per date",
                ),
            ),
            EngineError::InvalidYearMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            EngineError::ImportError { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("IMPORT_ERROR", message))
            }
        }
    }
}
