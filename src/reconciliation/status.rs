//! Shift status classification.
//!
//! Produces the display status of a shift from the shift's time bounds, the
//! current instant, and the day's punches for the shift's employee. The
//! status is re-derived on every read; there is no persisted status field
//! to go stale or drift from the alerting path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Punch, Shift};

use super::lateness::{LatenessThreshold, evaluate_clock_in};

/// The attendance status of one shift at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift has not started yet and no clock-in is expected yet.
    Pending,
    /// The employee clocked in within the grace period (or early).
    OnTime,
    /// The employee clocked in past the grace period.
    Late,
    /// The shift has started (or ended) without a clock-in being seen.
    Absent,
    /// The shift window has closed and the employee did clock in that day.
    Finished,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Pending => write!(f, "Pending"),
            ShiftStatus::OnTime => write!(f, "OnTime"),
            ShiftStatus::Late => write!(f, "Late"),
            ShiftStatus::Absent => write!(f, "Absent"),
            ShiftStatus::Finished => write!(f, "Finished"),
        }
    }
}

/// The classification of one shift: its status, plus the rounded delay when
/// the status is [`ShiftStatus::Late`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftClassification {
    /// The classified status.
    pub status: ShiftStatus,
    /// Minutes late, present only when `status` is `Late`.
    pub minutes_late: Option<i64>,
}

impl ShiftClassification {
    fn of(status: ShiftStatus) -> Self {
        ShiftClassification {
            status,
            minutes_late: None,
        }
    }
}

/// Classifies a shift's attendance status at instant `now`.
///
/// `day_punches` must be the shift's employee's punches within the shift's
/// civil day, in chronological order. The rules, first match wins:
///
/// 1. `now` past `end_at`: [`ShiftStatus::Finished`] if a clock-in was seen
///    that day, else [`ShiftStatus::Absent`]. A day with only clock-outs
///    counts as absent, since no clock-in was ever seen.
/// 2. Otherwise, when the latest punch is a clock-in, it is evaluated with
///    [`evaluate_clock_in`]: late yields [`ShiftStatus::Late`] with the
///    rounded delay attached, on time or early yields
///    [`ShiftStatus::OnTime`].
/// 3. Otherwise (no punches, or latest punch is a clock-out, meaning "not
///    currently clocked in"): [`ShiftStatus::Absent`] once the shift has
///    started, [`ShiftStatus::Pending`] before that.
///
/// Pure function of its inputs; a shift entirely in the future and one
/// entirely in the past both resolve without error. The lateness verdict
/// here and the one from the per-punch path come from the same evaluator,
/// so the two can never disagree for the same `{shift, punch, threshold}`.
pub fn classify_shift(
    shift: &Shift,
    now: DateTime<Utc>,
    day_punches: &[Punch],
    threshold: LatenessThreshold,
) -> ShiftClassification {
    if now > shift.end_at {
        let clocked_in = day_punches.iter().any(Punch::is_clock_in);
        return ShiftClassification::of(if clocked_in {
            ShiftStatus::Finished
        } else {
            ShiftStatus::Absent
        });
    }

    match day_punches.last() {
        Some(last) if last.is_clock_in() => {
            // evaluate_clock_in is Some for every clock-in
            match evaluate_clock_in(shift, last, threshold) {
                Some(check) if check.late => ShiftClassification {
                    status: ShiftStatus::Late,
                    minutes_late: Some(check.delay_minutes),
                },
                _ => ShiftClassification::of(ShiftStatus::OnTime),
            }
        }
        _ => ShiftClassification::of(if now >= shift.start_at {
            ShiftStatus::Absent
        } else {
            ShiftStatus::Pending
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchKind;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn shift_9_to_17() -> Shift {
        Shift {
            id: Uuid::new_v4(),
            employee_id: Uuid::nil(),
            boutique: None,
            start_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap(),
            published: true,
        }
    }

    fn punch(kind: PunchKind, h: u32, m: u32) -> Punch {
        Punch {
            id: Uuid::new_v4(),
            employee_id: Uuid::nil(),
            kind,
            at: Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap(),
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    fn threshold(minutes: i64) -> LatenessThreshold {
        LatenessThreshold::new(minutes).unwrap()
    }

    /// SC-001: before the shift with no punches, nothing to flag yet
    #[test]
    fn test_sc_001_future_shift_pending() {
        let result = classify_shift(&shift_9_to_17(), at(8, 30), &[], threshold(5));
        assert_eq!(result.status, ShiftStatus::Pending);
        assert_eq!(result.minutes_late, None);
    }

    /// SC-002: shift started, no clock-in seen
    #[test]
    fn test_sc_002_started_without_clock_in_absent() {
        let result = classify_shift(&shift_9_to_17(), at(9, 30), &[], threshold(5));
        assert_eq!(result.status, ShiftStatus::Absent);
    }

    /// SC-003: on-time clock-in
    #[test]
    fn test_sc_003_on_time_clock_in() {
        let punches = [punch(PunchKind::Entree, 9, 4)];
        let result = classify_shift(&shift_9_to_17(), at(10, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::OnTime);
        assert_eq!(result.minutes_late, None);
    }

    /// SC-004: late clock-in carries the rounded delay
    #[test]
    fn test_sc_004_late_clock_in() {
        let punches = [punch(PunchKind::Entree, 9, 6)];
        let result = classify_shift(&shift_9_to_17(), at(10, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::Late);
        assert_eq!(result.minutes_late, Some(6));
    }

    /// SC-005: early clock-in counts as on time
    #[test]
    fn test_sc_005_early_clock_in_on_time() {
        let punches = [punch(PunchKind::Entree, 8, 40)];
        let result = classify_shift(&shift_9_to_17(), at(9, 30), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::OnTime);
    }

    /// SC-006: closed shift with a clock-in that day is finished
    #[test]
    fn test_sc_006_closed_shift_finished() {
        let punches = [
            punch(PunchKind::Entree, 9, 2),
            punch(PunchKind::Sortie, 17, 1),
        ];
        let result = classify_shift(&shift_9_to_17(), at(18, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::Finished);
    }

    /// SC-007: closed shift with only a clock-out that day is absent, not
    /// finished, since no clock-in was ever seen
    #[test]
    fn test_sc_007_closed_shift_clock_out_only_absent() {
        let punches = [punch(PunchKind::Sortie, 17, 5)];
        let result = classify_shift(&shift_9_to_17(), at(18, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::Absent);
    }

    /// SC-008: closed shift with no punches at all is absent
    #[test]
    fn test_sc_008_closed_shift_no_punches_absent() {
        let result = classify_shift(&shift_9_to_17(), at(18, 0), &[], threshold(5));
        assert_eq!(result.status, ShiftStatus::Absent);
    }

    /// SC-009: latest punch a clock-out mid-shift means not currently in
    #[test]
    fn test_sc_009_clocked_out_mid_shift_absent() {
        let punches = [
            punch(PunchKind::Entree, 9, 0),
            punch(PunchKind::Sortie, 12, 0),
        ];
        let result = classify_shift(&shift_9_to_17(), at(13, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::Absent);
    }

    /// SC-010: only the chronologically latest punch determines presence
    #[test]
    fn test_sc_010_latest_punch_wins() {
        let punches = [
            punch(PunchKind::Entree, 9, 20),
            punch(PunchKind::Sortie, 12, 0),
            punch(PunchKind::Entree, 13, 0),
        ];
        // The 13:00 re-entry is 240 minutes after start, still evaluated
        // against the shift start, so it reads as late.
        let result = classify_shift(&shift_9_to_17(), at(14, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::Late);
        assert_eq!(result.minutes_late, Some(240));
    }

    /// SC-011: now exactly at end_at is still within the shift window
    #[test]
    fn test_sc_011_now_at_end_boundary() {
        let punches = [punch(PunchKind::Entree, 9, 0)];
        let result = classify_shift(&shift_9_to_17(), at(17, 0), &punches, threshold(5));
        assert_eq!(result.status, ShiftStatus::OnTime);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ShiftStatus::OnTime).unwrap(),
            "\"on_time\""
        );
        assert_eq!(serde_json::to_string(&ShiftStatus::Late).unwrap(), "\"late\"");
        assert_eq!(
            serde_json::from_str::<ShiftStatus>("\"finished\"").unwrap(),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ShiftStatus::Pending.to_string(), "Pending");
        assert_eq!(ShiftStatus::Absent.to_string(), "Absent");
    }
}
