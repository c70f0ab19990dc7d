//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading and validating
//! the engine configuration from a YAML file. Validation happens once here,
//! at startup: an invalid offset or a negative default threshold is fatal
//! before any evaluation runs, never a per-call failure.

use std::fs;
use std::path::Path;

use chrono::FixedOffset;

use crate::error::{EngineError, EngineResult};
use crate::reconciliation::LatenessThreshold;

use super::types::AttendanceConfig;

/// Loads and provides access to the engine configuration.
///
/// # File structure
///
/// ```text
/// config/attendance.yaml
/// ├── timezone:
/// │     utc_offset_hours: 1
/// └── lateness:
///       default_threshold_minutes: 5
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance.yaml")?;
/// let offset = loader.utc_offset();
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
    utc_offset: FixedOffset,
    default_threshold: LatenessThreshold,
}

impl ConfigLoader {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// A `ConfigLoader` on success, or an error if the file is missing
    /// ([`EngineError::ConfigNotFound`]), malformed
    /// ([`EngineError::ConfigParseError`]), or semantically invalid
    /// ([`EngineError::InvalidUtcOffset`], [`EngineError::InvalidThreshold`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AttendanceConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Validates an already-parsed configuration.
    pub fn from_config(config: AttendanceConfig) -> EngineResult<Self> {
        let hours = config.timezone.utc_offset_hours;
        let utc_offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or(EngineError::InvalidUtcOffset { hours })?;

        let default_threshold = LatenessThreshold::new(config.lateness.default_threshold_minutes)?;

        Ok(Self {
            config,
            utc_offset,
            default_threshold,
        })
    }

    /// Returns the raw configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the validated civil-time offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Returns the validated default lateness threshold.
    pub fn default_threshold(&self) -> LatenessThreshold {
        self.default_threshold
    }
}
