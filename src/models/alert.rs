//! Lateness alert model.
//!
//! The one entity the engine owns: a durable record of a specific late
//! clock-in. Alerts are created only by the alert emitter, never edited,
//! and at most one exists per punch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A durable record of a late clock-in.
///
/// `punch_id` is the natural dedup key: the store contract guarantees at
/// most one alert row per punch, which makes the emitter safe under retried
/// requests and duplicate realtime delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatenessAlert {
    /// Unique identifier for the alert.
    pub id: Uuid,
    /// The employee who clocked in late.
    pub employee_id: Uuid,
    /// The clock-in punch that triggered the alert.
    pub punch_id: Uuid,
    /// The shift the punch was evaluated against.
    pub shift_id: Uuid,
    /// Minutes between the shift start and the clock-in, rounded to the
    /// nearest minute. Always greater than `threshold_minutes`.
    pub minutes_late: i64,
    /// The grace period that was in effect when the alert was raised.
    pub threshold_minutes: u32,
    /// The instant the alert was recorded.
    pub created_at: DateTime<Utc>,
}
