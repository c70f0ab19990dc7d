//! Response types for the Attendance Reconciliation Engine API.
//!
//! This module defines the success envelopes, the error response structure,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::ShiftStatusRow;
use crate::error::EngineError;
use crate::reconciliation::DayWindow;

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
    /// Creates an error response from its parts.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidUtcOffset { hours } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid UTC offset",
                    format!("{} hours is not a valid civil-time offset", hours),
                ),
            },
            EngineError::InvalidThreshold { minutes } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_THRESHOLD",
                    format!("Invalid lateness threshold: {} minutes", minutes),
                    "The lateness threshold must be zero or a positive number of minutes",
                ),
            },
            EngineError::InvalidShift { shift_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift '{}': {}", shift_id, message),
                    "The shift data contains invalid information",
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", id),
                ),
            },
            EngineError::Storage { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Storage failure",
                    format!("{} (the request may be retried)", message),
                ),
            },
        }
    }
}

/// Response body for `POST /punches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchResponse {
    /// The id of the recorded punch.
    pub punch_id: Uuid,
    /// The instant the punch was recorded at.
    pub recorded_at: DateTime<Utc>,
    /// Whether the clock-in was late against its matched shift.
    pub late: bool,
    /// The rounded delay in minutes when a clock-in matched a shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_late: Option<i64>,
    /// Whether a new alert row was created for this punch.
    pub alert_created: bool,
}

/// Response body for `GET /dashboard/today`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// One row per shift scheduled today, sorted by start.
    pub rows: Vec<ShiftStatusRow>,
    /// The distinct boutiques appearing in the rows, for filter widgets.
    pub boutiques: Vec<String>,
    /// The civil-day window the rows were computed over.
    pub window: DayWindow,
    /// The grace period the rows were classified with.
    pub threshold_minutes: u32,
}

/// Response body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftsCreatedResponse {
    /// How many shifts were created.
    pub created: usize,
    /// Emails from the request that matched no employee and were skipped.
    pub skipped_emails: Vec<String>,
}
