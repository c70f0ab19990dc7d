//! Error types for the Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes the engine can surface to its callers.
//!
//! Two outcomes are deliberately *not* errors: a punch with no matching
//! shift (a normal empty result from the shift matcher), and a duplicate
//! alert insert (a successful no-op for the alert emitter).

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Attendance Reconciliation Engine.
///
/// Configuration problems (`ConfigNotFound`, `ConfigParseError`,
/// `InvalidUtcOffset`, `InvalidThreshold`) are fatal at startup or request
/// validation time and are kept distinct from runtime data errors.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidThreshold { minutes: -3 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid lateness threshold: -3 minutes (must be zero or positive)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured civil-time offset does not describe a valid UTC offset.
    #[error("Invalid UTC offset: {hours} hours")]
    InvalidUtcOffset {
        /// The offending offset, in hours.
        hours: i32,
    },

    /// A lateness threshold was negative.
    #[error("Invalid lateness threshold: {minutes} minutes (must be zero or positive)")]
    InvalidThreshold {
        /// The offending threshold, in minutes.
        minutes: i64,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: Uuid,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// The referenced employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        id: Uuid,
    },

    /// A storage collaborator call failed. Retryable by the caller; the
    /// engine itself never retries.
    #[error("Storage failure: {message}")]
    Storage {
        /// A description of the underlying storage failure.
        message: String,
    },
}

impl EngineError {
    /// Wraps a storage backend error.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        EngineError::Storage {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
