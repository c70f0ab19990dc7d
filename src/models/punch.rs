//! Punch model and related types.
//!
//! This module defines the Punch struct and PunchKind enum for representing
//! time-clock events. Punches are append-only: created exactly once per
//! clock action and never edited or merged afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The direction of a time-clock event.
///
/// The wire form keeps the original French uppercase literals used by the
/// clock terminals.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PunchKind;
///
/// assert_eq!(serde_json::to_string(&PunchKind::Entree).unwrap(), "\"ENTREE\"");
/// assert_eq!(serde_json::to_string(&PunchKind::Sortie).unwrap(), "\"SORTIE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchKind {
    /// A clock-in event.
    Entree,
    /// A clock-out event.
    Sortie,
}

impl std::fmt::Display for PunchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchKind::Entree => write!(f, "ENTREE"),
            PunchKind::Sortie => write!(f, "SORTIE"),
        }
    }
}

/// Represents one recorded time-clock event for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// Unique identifier for the punch. Also the natural dedup key for
    /// lateness alerts.
    pub id: Uuid,
    /// The employee who punched.
    pub employee_id: Uuid,
    /// Whether this is a clock-in or clock-out.
    pub kind: PunchKind,
    /// The instant the punch was recorded.
    pub at: DateTime<Utc>,
}

impl Punch {
    /// Returns true if this punch is a clock-in.
    ///
    /// Only clock-ins participate in lateness evaluation; clock-outs pass
    /// through untouched.
    pub fn is_clock_in(&self) -> bool {
        self.kind == PunchKind::Entree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_punch_kind_wire_format() {
        assert_eq!(
            serde_json::from_str::<PunchKind>("\"ENTREE\"").unwrap(),
            PunchKind::Entree
        );
        assert_eq!(
            serde_json::from_str::<PunchKind>("\"SORTIE\"").unwrap(),
            PunchKind::Sortie
        );
        assert!(serde_json::from_str::<PunchKind>("\"entree\"").is_err());
    }

    #[test]
    fn test_punch_kind_display() {
        assert_eq!(PunchKind::Entree.to_string(), "ENTREE");
        assert_eq!(PunchKind::Sortie.to_string(), "SORTIE");
    }

    #[test]
    fn test_is_clock_in() {
        let punch = Punch {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            kind: PunchKind::Entree,
            at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 4, 0).unwrap(),
        };
        assert!(punch.is_clock_in());

        let out = Punch {
            kind: PunchKind::Sortie,
            ..punch
        };
        assert!(!out.is_clock_in());
    }

    #[test]
    fn test_punch_serialization_round_trip() {
        let punch = Punch {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            kind: PunchKind::Sortie,
            at: Utc.with_ymd_and_hms(2026, 3, 2, 17, 5, 0).unwrap(),
        };
        let json = serde_json::to_string(&punch).unwrap();
        let deserialized: Punch = serde_json::from_str(&json).unwrap();
        assert_eq!(punch, deserialized);
    }
}
