//! Configuration types for the Attendance Reconciliation Engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

/// Civil-time settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TimezoneConfig {
    /// Fixed offset from UTC, in hours. No daylight-saving adjustment is
    /// applied; a documented limitation of the day-window computation.
    pub utc_offset_hours: i32,
}

/// Lateness policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LatenessConfig {
    /// Default grace period in minutes, used when a request does not
    /// override the threshold.
    pub default_threshold_minutes: i64,
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    /// Civil-time settings.
    pub timezone: TimezoneConfig,
    /// Lateness policy settings.
    pub lateness: LatenessConfig,
}
