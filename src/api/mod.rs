//! HTTP API module for the Duty Bonus Engine.
//!
//! This module provides the REST API endpoints for settling monthly duty
//! bonuses and inspecting the holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, CalculationRequest, DutyRequest, validate_duties};
pub use response::{
    ApiError, BatchCalculationResponse, CalculationResponse, ClassificationResponse,
    HolidaysResponse,
};
pub use state::AppState;
