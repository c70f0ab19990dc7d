//! Engine operations: the per-punch lateness check, the alert emitter, and
//! the dashboard aggregate.
//!
//! These functions orchestrate the pure pieces in [`crate::reconciliation`]
//! over data fetched through an [`AttendanceStore`]. Both entry points take
//! the lateness threshold and the civil-time offset explicitly, so the
//! synchronous per-punch path and the dashboard path are provably applying
//! the same policy, never two copies of it.
//!
//! Execution is request-scoped: nothing is cached between calls, and every
//! call recomputes from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LatenessAlert, Punch, Shift};
use crate::reconciliation::{
    LatenessThreshold, ShiftStatus, civil_day_window, classify_shift, evaluate_clock_in,
    select_shift,
};
use crate::store::AttendanceStore;

/// The outcome of evaluating one punch against the day's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvaluation {
    /// True when the punch is a clock-in that arrived past the grace period
    /// of its matched shift.
    pub late: bool,
    /// The rounded delay in minutes, present whenever a clock-in was
    /// evaluated against a matched shift (negative means early).
    pub minutes_late: Option<i64>,
    /// The shift the punch was evaluated against, when one matched.
    pub matched_shift: Option<Shift>,
}

impl PunchEvaluation {
    fn no_op() -> Self {
        PunchEvaluation {
            late: false,
            minutes_late: None,
            matched_shift: None,
        }
    }
}

/// The outcome of asking the alert emitter to record a late arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    /// A new alert row was appended.
    Created(LatenessAlert),
    /// An alert for this punch already existed; nothing was written.
    AlreadyRecorded,
}

impl AlertOutcome {
    /// Returns true when a new alert row was appended.
    pub fn created(&self) -> bool {
        matches!(self, AlertOutcome::Created(_))
    }
}

/// A summary of the employee a dashboard row belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee id.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The employee's email.
    pub email: String,
}

/// One dashboard row: a shift scheduled today with its classified status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStatusRow {
    /// The shift id.
    pub shift_id: Uuid,
    /// The shift's location tag, if any.
    pub boutique: Option<String>,
    /// The instant the shift starts.
    pub start_at: DateTime<Utc>,
    /// The instant the shift ends.
    pub end_at: DateTime<Utc>,
    /// The employee the shift is scheduled for.
    pub employee: EmployeeSummary,
    /// The employee's most recent punch of the day, if any.
    pub last_punch: Option<Punch>,
    /// The classified attendance status.
    pub status: ShiftStatus,
    /// Minutes late, present only when `status` is [`ShiftStatus::Late`].
    pub minutes_late: Option<i64>,
}

/// Evaluates a freshly recorded punch for lateness.
///
/// Invoked synchronously right after a punch is durably recorded. The flow:
/// clock-outs short-circuit to a no-op; for a clock-in, the civil day of the
/// punch's own timestamp is computed, the employee's shifts starting that
/// day are fetched, the earliest one is matched (smallest id on ties), and
/// the delay is classified against `threshold`.
///
/// "No shift today" is a normal non-late outcome, not an error. On
/// `late == true` the caller is expected to persist the alert via
/// [`record_late_arrival`].
pub async fn evaluate_punch_for_lateness<S: AttendanceStore>(
    store: &S,
    punch: &Punch,
    threshold: LatenessThreshold,
    utc_offset: chrono::FixedOffset,
) -> EngineResult<PunchEvaluation> {
    if !punch.is_clock_in() {
        return Ok(PunchEvaluation::no_op());
    }

    let window = civil_day_window(punch.at, utc_offset);
    let shifts = store
        .shifts_for_employee_on_day(punch.employee_id, window)
        .await
        .map_err(EngineError::storage)?;

    let Some(shift) = select_shift(&shifts) else {
        return Ok(PunchEvaluation::no_op());
    };

    let check = evaluate_clock_in(shift, punch, threshold);
    Ok(PunchEvaluation {
        late: check.is_some_and(|c| c.late),
        minutes_late: check.map(|c| c.delay_minutes),
        matched_shift: Some(shift.clone()),
    })
}

/// Records a lateness alert for a punch, idempotently.
///
/// Invoked exactly when [`evaluate_punch_for_lateness`] classified the punch
/// as late. Safe to call more than once for the same punch: retried
/// requests and duplicate realtime delivery produce
/// [`AlertOutcome::AlreadyRecorded`], never a second row. A failed insert
/// surfaces as [`EngineError::Storage`] and is never reported as success.
pub async fn record_late_arrival<S: AttendanceStore>(
    store: &S,
    shift: &Shift,
    punch: &Punch,
    minutes_late: i64,
    threshold: LatenessThreshold,
) -> EngineResult<AlertOutcome> {
    let alert = LatenessAlert {
        id: Uuid::new_v4(),
        employee_id: punch.employee_id,
        punch_id: punch.id,
        shift_id: shift.id,
        minutes_late,
        threshold_minutes: threshold.minutes(),
        created_at: Utc::now(),
    };

    let created = store
        .insert_alert_if_absent(alert.clone())
        .await
        .map_err(EngineError::storage)?;

    Ok(if created {
        AlertOutcome::Created(alert)
    } else {
        AlertOutcome::AlreadyRecorded
    })
}

/// Computes the classified status of every shift scheduled "today".
///
/// "Today" is the civil day containing `now`. For each employee, the day's
/// shifts (optionally narrowed to one boutique) and punches are fetched and
/// each shift is classified with the same evaluator the per-punch path
/// uses. Rows are sorted by `(start_at, shift_id)`.
///
/// The per-shift classification is a pure function over the fetched data;
/// no locking or snapshot atomicity is required across shifts, at worst the
/// combined view is slightly stale.
pub async fn compute_today_statuses<S: AttendanceStore>(
    store: &S,
    employee_ids: &[Uuid],
    now: DateTime<Utc>,
    threshold: LatenessThreshold,
    utc_offset: chrono::FixedOffset,
    boutique_filter: Option<&str>,
) -> EngineResult<Vec<ShiftStatusRow>> {
    let window = civil_day_window(now, utc_offset);
    let mut rows = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for &employee_id in employee_ids {
        if !seen.insert(employee_id) {
            continue;
        }

        let mut shifts = store
            .shifts_for_employee_on_day(employee_id, window)
            .await
            .map_err(EngineError::storage)?;
        if let Some(boutique) = boutique_filter {
            shifts.retain(|s| s.boutique.as_deref() == Some(boutique));
        }
        if shifts.is_empty() {
            continue;
        }

        // Missing employee rows are tolerated as a normal empty result;
        // the shift cannot be displayed without its owner.
        let Some(employee) = store
            .get_employee(employee_id)
            .await
            .map_err(EngineError::storage)?
        else {
            continue;
        };

        let punches = store
            .punches_for_employee_on_day(employee_id, window)
            .await
            .map_err(EngineError::storage)?;

        for shift in &shifts {
            let classification = classify_shift(shift, now, &punches, threshold);
            rows.push(ShiftStatusRow {
                shift_id: shift.id,
                boutique: shift.boutique.clone(),
                start_at: shift.start_at,
                end_at: shift.end_at,
                employee: EmployeeSummary {
                    id: employee.id,
                    name: employee.name.clone(),
                    email: employee.email.clone(),
                },
                last_punch: punches.last().cloned(),
                status: classification.status,
                minutes_late: classification.minutes_late,
            });
        }
    }

    rows.sort_by_key(|r| (r.start_at, r.shift_id));
    Ok(rows)
}
