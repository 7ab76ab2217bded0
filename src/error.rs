//! Error types for the Duty Bonus Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop configuration loading, duty validation
//! or roster maintenance. The bonus calculation itself is infallible.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Duty Bonus Engine.
///
/// # Example
///
/// ```
/// use duty_bonus_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/bonus.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/bonus.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot work with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A duty share other than a full (1.0) or half (0.5) shift.
    #[error("Invalid duty share {share}: must be 1.0 or 0.5")]
    InvalidShare {
        /// The rejected share value.
        share: Decimal,
    },

    /// A duty record that cannot be accepted at the boundary.
    #[error("Invalid duty on {date}: {message}")]
    InvalidDuty {
        /// The date of the rejected duty.
        date: NaiveDate,
        /// A description of what made the duty invalid.
        message: String,
    },

    /// A year-month key that is not of the form `YYYY-MM`.
    #[error("Invalid year-month '{value}': expected YYYY-MM")]
    InvalidYearMonth {
        /// The rejected text.
        value: String,
    },

    /// The employee is not registered in the duty roster.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The unknown employee identifier.
        employee_id: String,
    },

    /// Roster data could not be imported.
    #[error("Import failed: {message}")]
    ImportError {
        /// A description of the import failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/bonus.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/bonus.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "rate_normal".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'rate_normal': must not be negative"
        );
    }

    #[test]
    fn test_invalid_share_displays_value() {
        let error = EngineError::InvalidShare {
            share: Decimal::from_str("0.75").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid duty share 0.75: must be 1.0 or 0.5"
        );
    }

    #[test]
    fn test_invalid_duty_displays_date_and_message() {
        let error = EngineError::InvalidDuty {
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            message: "duplicate date".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid duty on 2026-01-17: duplicate date");
    }

    #[test]
    fn test_invalid_year_month_displays_value() {
        let error = EngineError::InvalidYearMonth {
            value: "2026/01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid year-month '2026/01': expected YYYY-MM"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            employee_id: "Weber".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: Weber");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_import_error() -> EngineResult<()> {
            Err(EngineError::ImportError {
                message: "not JSON".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_import_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
