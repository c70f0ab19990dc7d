//! Core data models for the Attendance Reconciliation Engine.
//!
//! This module contains all the domain entities the engine reads and, for
//! alerts, produces.

mod alert;
mod employee;
mod punch;
mod shift;

pub use alert::LatenessAlert;
pub use employee::Employee;
pub use punch::{Punch, PunchKind};
pub use shift::Shift;
