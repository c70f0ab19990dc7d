//! Lateness evaluation logic.
//!
//! Given a matched shift and a clock-in punch, computes the delay in whole
//! minutes and classifies it against a grace period. This computation backs
//! both the synchronous per-punch check and the dashboard aggregate; the
//! same `{shift, punch, threshold}` triple always yields the same result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Punch, Shift};

/// A validated grace period, in whole minutes, after a shift's start before
/// a clock-in counts as late.
///
/// Always passed explicitly into evaluation calls, never read from ambient
/// state, so the per-punch check and the dashboard aggregate are guaranteed
/// to use the same value when invoked with the same configuration snapshot.
///
/// # Example
///
/// ```
/// use attendance_engine::reconciliation::LatenessThreshold;
///
/// let threshold = LatenessThreshold::new(5).unwrap();
/// assert_eq!(threshold.minutes(), 5);
/// assert!(LatenessThreshold::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LatenessThreshold(u32);

impl LatenessThreshold {
    /// Creates a threshold from a number of minutes.
    ///
    /// Returns [`EngineError::InvalidThreshold`] for negative values.
    pub fn new(minutes: i64) -> EngineResult<Self> {
        let minutes =
            u32::try_from(minutes).map_err(|_| EngineError::InvalidThreshold { minutes })?;
        Ok(LatenessThreshold(minutes))
    }

    /// Returns the grace period in minutes.
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for LatenessThreshold {
    type Error = EngineError;

    fn try_from(minutes: i64) -> EngineResult<Self> {
        LatenessThreshold::new(minutes)
    }
}

impl From<LatenessThreshold> for i64 {
    fn from(threshold: LatenessThreshold) -> i64 {
        threshold.0.into()
    }
}

/// The result of evaluating a clock-in against its matched shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatenessCheck {
    /// Minutes between the shift start and the clock-in, rounded to the
    /// nearest minute. Negative means an early clock-in.
    pub delay_minutes: i64,
    /// True when the delay strictly exceeds the threshold.
    pub late: bool,
}

/// Computes the delay between a shift start and a clock-in, in whole minutes.
///
/// Rounds to the nearest minute, with ties rounding toward positive
/// infinity: 5 minutes 30 seconds rounds to 6, minus 30 seconds rounds to 0.
/// Negative results are legal and mean an early clock-in.
///
/// # Example
///
/// ```
/// use attendance_engine::reconciliation::delay_in_minutes;
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
/// let clock_in = Utc.with_ymd_and_hms(2026, 3, 2, 9, 6, 0).unwrap();
/// assert_eq!(delay_in_minutes(start, clock_in), 6);
///
/// let early = Utc.with_ymd_and_hms(2026, 3, 2, 8, 57, 0).unwrap();
/// assert_eq!(delay_in_minutes(start, early), -3);
/// ```
pub fn delay_in_minutes(shift_start: DateTime<Utc>, clock_in: DateTime<Utc>) -> i64 {
    let seconds = (clock_in - shift_start).num_seconds();
    (seconds + 30).div_euclid(60)
}

/// Evaluates a punch against its matched shift.
///
/// Only clock-ins are evaluated: a `Sortie` punch returns `None` (a no-op
/// passthrough, never an error). For a clock-in, the delay is computed with
/// [`delay_in_minutes`] and classified against `threshold`:
///
/// - `delay < 0`: early, not late
/// - `0 <= delay <= threshold`: on time (a delay exactly at the threshold
///   is on time, the comparison is strict)
/// - `delay > threshold`: late, qualifying for an alert
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Punch, PunchKind, Shift};
/// use attendance_engine::reconciliation::{LatenessThreshold, evaluate_clock_in};
/// use chrono::{TimeZone, Utc};
/// use uuid::Uuid;
///
/// let employee_id = Uuid::new_v4();
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     employee_id,
///     boutique: None,
///     start_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
///     end_at: Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap(),
///     published: true,
/// };
/// let punch = Punch {
///     id: Uuid::new_v4(),
///     employee_id,
///     kind: PunchKind::Entree,
///     at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 6, 0).unwrap(),
/// };
///
/// let threshold = LatenessThreshold::new(5).unwrap();
/// let check = evaluate_clock_in(&shift, &punch, threshold).unwrap();
/// assert!(check.late);
/// assert_eq!(check.delay_minutes, 6);
/// ```
pub fn evaluate_clock_in(
    shift: &Shift,
    punch: &Punch,
    threshold: LatenessThreshold,
) -> Option<LatenessCheck> {
    if !punch.is_clock_in() {
        return None;
    }
    let delay_minutes = delay_in_minutes(shift.start_at, punch.at);
    Some(LatenessCheck {
        delay_minutes,
        late: delay_minutes > i64::from(threshold.minutes()),
    })
}
