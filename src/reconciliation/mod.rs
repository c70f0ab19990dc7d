//! Reconciliation logic for the Attendance Reconciliation Engine.
//!
//! This module contains the pure functions that reconcile scheduled shifts
//! with time-clock punches: computing civil-day windows, matching punches
//! to shifts, evaluating clock-in delays against a lateness threshold, and
//! classifying each shift into a display status.
//!
//! Everything here is a pure function of its inputs. All I/O lives behind
//! the [`crate::store::AttendanceStore`] collaborator and is orchestrated
//! by [`crate::engine`].

mod day_window;
mod lateness;
mod shift_match;
mod status;

pub use day_window::{DayWindow, civil_day_window};
pub use lateness::{LatenessCheck, LatenessThreshold, delay_in_minutes, evaluate_clock_in};
pub use shift_match::select_shift;
pub use status::{ShiftClassification, ShiftStatus, classify_shift};
