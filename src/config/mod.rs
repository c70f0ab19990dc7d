//! Configuration loading and management for the Attendance Reconciliation Engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file: the fixed civil-time offset used to bound "today", and the
//! default lateness threshold the HTTP layer falls back to when a request
//! does not override it.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance.yaml").unwrap();
//! println!("Grace period: {} min", config.default_threshold().minutes());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, LatenessConfig, TimezoneConfig};
