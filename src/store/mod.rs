//! The `AttendanceStore` trait and the in-memory backend.
//!
//! The trait is the engine's external storage collaborator: every read of
//! shifts, punches and employees, and every alert append, goes through it.
//! The engine treats calls as synchronous request/response and performs no
//! implicit retries; retry policy belongs to the caller.

mod memory;

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Employee, LatenessAlert, Punch, Shift};
use crate::reconciliation::DayWindow;

pub use memory::{MemoryStore, MemoryStoreError};

/// Abstraction over the attendance data store.
///
/// Punches and alerts are append-only: punches are created exactly once per
/// clock action, and alerts only through [`insert_alert_if_absent`], which
/// enforces at most one alert per punch at the store contract level.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with `axum`).
///
/// [`insert_alert_if_absent`]: AttendanceStore::insert_alert_if_absent
pub trait AttendanceStore: Send + Sync {
    /// The backend's error type.
    type Error: std::error::Error + Send + Sync + 'static;

    // ── Employees ─────────────────────────────────────────────────────────

    /// Retrieve an employee by id. Returns `None` if not found.
    fn get_employee(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

    /// Look up an employee by email. Returns `None` if not found.
    fn find_employee_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

    /// List all employees, ordered by name.
    fn list_employees(
        &self,
    ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

    /// Persist a new employee. Rejects a duplicate email.
    fn insert_employee(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

    // ── Shifts ────────────────────────────────────────────────────────────

    /// Persist a new shift.
    fn insert_shift(
        &self,
        shift: Shift,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

    /// List all shifts with `start_at` in `[from, to)`, ordered by start.
    fn shifts_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Shift>, Self::Error>> + Send + '_;

    /// List one employee's shifts whose `start_at` falls within the civil
    /// day `window`, ordered by `start_at` ascending (ties by id).
    fn shifts_for_employee_on_day(
        &self,
        employee_id: Uuid,
        window: DayWindow,
    ) -> impl Future<Output = Result<Vec<Shift>, Self::Error>> + Send + '_;

    // ── Punches (append-only) ─────────────────────────────────────────────

    /// Persist a new punch.
    fn insert_punch(
        &self,
        punch: Punch,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

    /// List one employee's punches within the civil day `window`, in
    /// chronological order.
    fn punches_for_employee_on_day(
        &self,
        employee_id: Uuid,
        window: DayWindow,
    ) -> impl Future<Output = Result<Vec<Punch>, Self::Error>> + Send + '_;

    // ── Alerts (append-only, deduplicated by punch) ───────────────────────

    /// Append an alert unless one already exists for the same punch.
    ///
    /// Returns `true` when a row was appended, `false` when an alert for
    /// `alert.punch_id` already existed (a successful no-op, not an error).
    fn insert_alert_if_absent(
        &self,
        alert: LatenessAlert,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

    /// List all alerts, newest first.
    fn list_alerts(
        &self,
    ) -> impl Future<Output = Result<Vec<LatenessAlert>, Self::Error>> + Send + '_;
}
