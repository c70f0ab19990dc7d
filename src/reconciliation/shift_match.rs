//! Shift matching logic.
//!
//! For one employee and one civil day, selects the shift that punches are
//! evaluated against. A clock-in is always evaluated against the first
//! scheduled shift of the day; later shifts on a split-shift day are not
//! matched (documented limitation: supporting them needs a multi-match
//! policy, not a silent default).

use crate::models::Shift;

/// Selects the candidate shift among a day's shifts for one employee.
///
/// Returns the earliest-starting shift; ties on `start_at` are broken by
/// the smallest shift id so repeated calls over the same data always pick
/// the same shift. An empty slice yields `None`: an unmatched punch is a
/// normal outcome, not an error.
///
/// The input does not need to be pre-sorted.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Shift;
/// use attendance_engine::reconciliation::select_shift;
/// use chrono::{TimeZone, Utc};
/// use uuid::Uuid;
///
/// let employee_id = Uuid::new_v4();
/// let early = Shift {
///     id: Uuid::new_v4(),
///     employee_id,
///     boutique: None,
///     start_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
///     end_at: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
///     published: true,
/// };
/// let late = Shift {
///     id: Uuid::new_v4(),
///     start_at: Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap(),
///     end_at: Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap(),
///     ..early.clone()
/// };
///
/// let shifts = vec![late, early.clone()];
/// assert_eq!(select_shift(&shifts), Some(&shifts[1]));
/// assert_eq!(select_shift(&[]), None);
/// ```
pub fn select_shift(shifts: &[Shift]) -> Option<&Shift> {
    shifts.iter().min_by_key(|s| (s.start_at, s.id))
}
