//! HTTP API module for the Attendance Reconciliation Engine.
//!
//! This module provides the REST endpoints the clock terminals and the
//! manager dashboard talk to: recording punches, reading today's statuses,
//! and the supporting employee/shift/alert resources.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DashboardQuery, NewEmployeeRequest, NewShiftItem, NewShiftsRequest, PunchRequest, ShiftsQuery,
};
pub use response::{ApiError, DashboardResponse, PunchResponse, ShiftsCreatedResponse};
pub use state::AppState;
