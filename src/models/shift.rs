//! Shift model.
//!
//! This module defines the Shift struct representing a scheduled work
//! interval for one employee. Shifts are authored by managers in weekly
//! planning; the engine reads them to evaluate punches against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents a scheduled work interval for one employee.
///
/// `end_at` is strictly after `start_at`; [`Shift::validate`] enforces this
/// at creation time. Shifts for the same employee on the same day may
/// overlap; the shift matcher picks deterministically among candidates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Shift;
/// use chrono::{TimeZone, Utc};
/// use uuid::Uuid;
///
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     employee_id: Uuid::new_v4(),
///     boutique: Some("Opéra".to_string()),
///     start_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
///     end_at: Utc.with_ymd_and_hms(2026, 3, 2, 16, 0, 0).unwrap(),
///     published: true,
/// };
/// assert!(shift.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The employee this shift is scheduled for.
    pub employee_id: Uuid,
    /// Optional location tag for the shift.
    #[serde(default)]
    pub boutique: Option<String>,
    /// The instant the shift starts.
    pub start_at: DateTime<Utc>,
    /// The instant the shift ends, strictly after `start_at`.
    pub end_at: DateTime<Utc>,
    /// Whether the shift has been published to the employee. Relevant to
    /// upstream editability only, never to reconciliation.
    #[serde(default)]
    pub published: bool,
}

impl Shift {
    /// Checks that the shift's time bounds are coherent.
    ///
    /// Returns [`EngineError::InvalidShift`] when `end_at` is not strictly
    /// after `start_at`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_at <= self.start_at {
            return Err(EngineError::InvalidShift {
                shift_id: self.id,
                message: "end_at must be strictly after start_at".to_string(),
            });
        }
        Ok(())
    }
}
