//! HTTP request handlers for the Duty Bonus Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{BatchCalculationRequest, CalculationRequest};
use super::response::{
    ApiError, ApiErrorResponse, BatchCalculationResponse, CalculationResponse,
    ClassificationResponse, HolidaysResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(calculate_batch_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/classify/:date", get(classify_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts one employee's duties for a month and returns the payout
/// breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    let employee_id = request.employee_id.clone();
    let month = request.month;

    let duties = match request.into_records() {
        Ok(duties) => duties,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Rejected duties"
            );
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let result = state.engine().calculate_monthly_bonus(&duties);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        month = %month,
        duties_count = duties.len(),
        threshold_reached = result.threshold_reached,
        total_bonus = %result.total_bonus,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id,
            month,
            result,
        },
    )
}

/// Handler for POST /calculate/batch endpoint.
///
/// Settles every employee in the request independently and returns the
/// organization report.
async fn calculate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    let month = request.month;
    let employee_duties = match request.into_records() {
        Ok(duties) => duties,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected duties"
            );
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let report = state.engine().organization_report(month, &employee_duties);

    info!(
        correlation_id = %correlation_id,
        month = %month,
        employees = report.results.len(),
        employees_with_bonus = report.employees_with_bonus,
        total_bonus = %report.total_bonus,
        duration_us = start_time.elapsed().as_micros(),
        "Batch calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        BatchCalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        },
    )
}

/// Handler for GET /holidays/{year}.
async fn holidays_handler(State(state): State<AppState>, Path(year): Path<String>) -> Response {
    let Ok(year) = year.parse::<i32>() else {
        warn!(year = %year, "Invalid year requested");
        return error_response(ApiErrorResponse::bad_request(ApiError::invalid_path(
            &year,
            "a four-digit year",
        )));
    };

    let calendar = state.config().calendar();
    let covered = calendar.covers_year(year);
    if !covered {
        warn!(year, "Requested year outside the holiday table");
    }

    json_response(
        StatusCode::OK,
        HolidaysResponse {
            year,
            covered,
            holidays: calendar.holidays_for_year(year).to_vec(),
        },
    )
}

/// Handler for GET /classify/{date}.
async fn classify_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let Ok(parsed) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
        warn!(date = %date, "Invalid date requested");
        return error_response(ApiErrorResponse::bad_request(ApiError::invalid_path(
            &date,
            "a date in YYYY-MM-DD format",
        )));
    };

    let engine = state.engine();
    let day_kind = engine.classify_day(parsed);

    json_response(
        StatusCode::OK,
        ClassificationResponse {
            date: parsed,
            weekday: parsed.weekday(),
            is_qualifying: day_kind.is_qualifying(),
            label: engine.day_type_label(parsed),
            day_kind,
            covered: engine.calendar().covers(parsed),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DayKind;
    use crate::config::ConfigLoader;
    use axum::body::{Body, Bytes};
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/nrw").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, Bytes) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    async fn get_path(uri: &str) -> (StatusCode, Bytes) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee_id": "Max Mustermann",
            "month": "2026-01",
            "duties": [
                { "date": "2026-01-16", "share": 1.0 },
                { "date": "2026-01-17", "share": 1.0 },
                { "date": "2026-01-18", "share": 1.0 }
            ]
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(response.employee_id, "Max Mustermann");
        assert!(response.result.threshold_reached);
        assert_eq!(response.result.total_bonus, dec("450"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, body) = post_json("/calculate", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_employee_id_returns_400() {
        let body = r#"{ "month": "2026-01", "duties": [] }"#.to_string();
        let (status, body) = post_json("/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_invalid_share_returns_400() {
        let body = r#"{
            "employee_id": "Max Mustermann",
            "month": "2026-01",
            "duties": [{ "date": "2026-01-17", "share": 0.75 }]
        }"#
        .to_string();
        let (status, body) = post_json("/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SHARE");
    }

    #[tokio::test]
    async fn test_api_005_duty_outside_month_returns_400() {
        let body = r#"{
            "employee_id": "Max Mustermann",
            "month": "2026-01",
            "duties": [{ "date": "2026-02-07", "share": 1.0 }]
        }"#
        .to_string();
        let (status, body) = post_json("/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DUTY");
    }

    #[tokio::test]
    async fn test_empty_duties_return_zero_result() {
        let body = r#"{ "employee_id": "Max Mustermann", "month": "2026-01" }"#.to_string();
        let (status, body) = post_json("/calculate", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: CalculationResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.result.threshold_reached);
        assert_eq!(response.result.total_bonus, Decimal::ZERO);
        assert!(response.result.duty_details.is_empty());
    }

    #[tokio::test]
    async fn test_batch_returns_report() {
        let body = r#"{
            "month": "2026-01",
            "employees": {
                "Anna Schmidt": [
                    { "date": "2026-01-12", "share": 1.0 },
                    { "date": "2026-01-13", "share": 1.0 },
                    { "date": "2026-01-17", "share": 1.0 },
                    { "date": "2026-01-18", "share": 1.0 }
                ],
                "Max Mustermann": [{ "date": "2026-01-17", "share": 1.0 }]
            }
        }"#
        .to_string();
        let (status, body) = post_json("/calculate/batch", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: BatchCalculationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.report.results.len(), 2);
        assert_eq!(response.report.total_bonus, dec("500"));
        assert_eq!(response.report.employees_with_bonus, 1);
    }

    #[tokio::test]
    async fn test_holidays_for_covered_year() {
        let (status, body) = get_path("/holidays/2026").await;

        assert_eq!(status, StatusCode::OK);
        let response: HolidaysResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.covered);
        assert_eq!(response.holidays.len(), 11);
        assert_eq!(response.holidays[0].name, "Neujahr");
    }

    #[tokio::test]
    async fn test_holidays_for_uncovered_year_is_empty() {
        let (status, body) = get_path("/holidays/2040").await;

        assert_eq!(status, StatusCode::OK);
        let response: HolidaysResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.covered);
        assert!(response.holidays.is_empty());
    }

    #[tokio::test]
    async fn test_skipped_year_is_uncovered_on_both_endpoints() {
        let dir = std::env::temp_dir().join(format!("duty-bonus-gap-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("holidays")).unwrap();
        std::fs::write(
            dir.join("scheme.yaml"),
            "code: TEST\nname: Test scheme\njurisdiction: XX\ncurrency: EUR\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("bonus.yaml"),
            "rate_normal: \"250\"\nrate_weekend: \"450\"\nmin_qualifying_days: \"2.0\"\ndeduction_amount: \"2.0\"\n",
        )
        .unwrap();
        for year in [2026, 2028] {
            std::fs::write(
                dir.join("holidays").join(format!("{}.yaml", year)),
                format!("year: {0}\nholidays:\n  - date: \"{0}-01-01\"\n    name: Neujahr\n", year),
            )
            .unwrap();
        }
        let state = AppState::new(ConfigLoader::load(&dir).unwrap());
        let _ = std::fs::remove_dir_all(&dir);

        let get = |uri: &'static str| {
            let router = create_router(state.clone());
            async move {
                let response = router
                    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                    .await
                    .unwrap();
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap()
            }
        };

        let holidays: HolidaysResponse = serde_json::from_slice(&get("/holidays/2027").await).unwrap();
        let classified: ClassificationResponse =
            serde_json::from_slice(&get("/classify/2027-06-01").await).unwrap();

        assert!(!holidays.covered);
        assert!(!classified.covered);
    }

    #[tokio::test]
    async fn test_holidays_rejects_bad_year() {
        let (status, body) = get_path("/holidays/next").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PATH_PARAMETER");
    }

    #[tokio::test]
    async fn test_classify_holiday_eve() {
        // Wednesday before Christi Himmelfahrt 2026
        let (status, body) = get_path("/classify/2026-05-13").await;

        assert_eq!(status, StatusCode::OK);
        let response: ClassificationResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.is_qualifying);
        assert!(response.covered);
        assert_eq!(response.day_kind, DayKind::DayBeforeHoliday);
        assert_eq!(response.label, "Day before public holiday");
    }

    #[tokio::test]
    async fn test_classify_rejects_bad_date() {
        let (status, _) = get_path("/classify/2026-02-30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
