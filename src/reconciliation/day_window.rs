//! Civil-day window computation.
//!
//! This module provides the single utility both evaluation paths use to
//! scope "today": given an instant and a fixed civil-time offset, it
//! returns the UTC bounds of the civil day containing that instant.
//!
//! The offset is fixed, with no daylight-saving adjustment. This is a
//! documented limitation, not corrected here.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` window of UTC instants bounding one civil day.
///
/// # Example
///
/// ```
/// use attendance_engine::reconciliation::civil_day_window;
/// use chrono::{FixedOffset, TimeZone, Utc};
///
/// let paris_winter = FixedOffset::east_opt(3600).unwrap();
/// let instant = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
/// let window = civil_day_window(instant, paris_winter);
///
/// // 2026-03-02 00:00 +01:00 is 2026-03-01 23:00 UTC.
/// assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 3, 1, 23, 0, 0).unwrap());
/// assert_eq!(window.end, Utc.with_ymd_and_hms(2026, 3, 2, 23, 0, 0).unwrap());
/// assert!(window.contains(instant));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// The first instant of the civil day (inclusive).
    pub start: DateTime<Utc>,
    /// The first instant of the next civil day (exclusive).
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Returns true if `instant` falls within the window (`start` inclusive,
    /// `end` exclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Computes the civil-day window containing `instant` under a fixed offset.
///
/// Pure function. Offset validity is a configuration concern checked once
/// at startup (see [`crate::config::ConfigLoader`]), not per call.
///
/// # Arguments
///
/// * `instant` - The instant whose civil day is wanted
/// * `offset` - The fixed civil-time offset (e.g. UTC+1)
///
/// # Returns
///
/// The `[start, end)` UTC bounds of the civil day, with `end` exactly 24
/// hours after `start`.
pub fn civil_day_window(instant: DateTime<Utc>, offset: FixedOffset) -> DayWindow {
    let local_midnight = instant
        .with_timezone(&offset)
        .date_naive()
        .and_time(NaiveTime::MIN);
    let start =
        Utc.from_utc_datetime(&(local_midnight - Duration::seconds(offset.local_minus_utc().into())));
    DayWindow {
        start,
        end: start + Duration::hours(24),
    }
}
