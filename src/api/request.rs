//! Request types for the Attendance Reconciliation Engine API.
//!
//! This module defines the JSON request and query structures for the
//! endpoints in [`super::handlers`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PunchKind;

/// Request body for `POST /punches`.
///
/// The clock terminal has already verified the employee's PIN before
/// calling; credential checking is not this service's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee punching.
    pub employee_id: Uuid,
    /// Clock-in or clock-out.
    pub kind: PunchKind,
    /// The punch instant. Defaults to the current instant when omitted;
    /// timestamps earlier than the matched shift are accepted as-is.
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// The employee's email, unique across the system.
    pub email: String,
}

/// One shift in a `POST /shifts` batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShiftItem {
    /// Email of the employee the shift is for. Items whose email matches
    /// no employee are skipped.
    pub email: String,
    /// Optional location tag.
    #[serde(default)]
    pub boutique: Option<String>,
    /// The instant the shift starts.
    pub start_at: DateTime<Utc>,
    /// The instant the shift ends, strictly after `start_at`.
    pub end_at: DateTime<Utc>,
    /// Whether the shift is published to the employee.
    #[serde(default)]
    pub published: bool,
}

/// Request body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShiftsRequest {
    /// The shifts to create.
    pub items: Vec<NewShiftItem>,
}

/// Query parameters for `GET /dashboard/today`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// Grace period override in minutes; falls back to the configured
    /// default when omitted. Negative values are rejected.
    #[serde(default)]
    pub threshold: Option<i64>,
    /// Restrict rows to one boutique.
    #[serde(default)]
    pub boutique: Option<String>,
}

/// Query parameters for `GET /shifts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsQuery {
    /// Inclusive lower bound on `start_at`.
    pub from: DateTime<Utc>,
    /// Exclusive upper bound on `start_at`.
    pub to: DateTime<Utc>,
}
