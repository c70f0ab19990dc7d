//! In-memory `AttendanceStore` backend.
//!
//! Backs the HTTP layer and the test suite. A production deployment would
//! implement [`AttendanceStore`] over a real database; the engine only ever
//! sees the trait.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Employee, LatenessAlert, Punch, Shift};
use crate::reconciliation::DayWindow;

use super::AttendanceStore;

/// Errors produced by the in-memory backend.
#[derive(Debug, Error)]
pub enum MemoryStoreError {
    /// An employee with the same email already exists.
    #[error("Email already in use: {email}")]
    EmailTaken {
        /// The duplicate email.
        email: String,
    },

    /// The store's lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    punches: Vec<Punch>,
    alerts: Vec<LatenessAlert>,
}

/// An in-memory attendance store.
///
/// Interior locking exists only to satisfy `Send + Sync`; no lock is held
/// across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, MemoryStoreError> {
        let tables = self.tables.read().map_err(|_| MemoryStoreError::Poisoned)?;
        Ok(f(&tables))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, MemoryStoreError> {
        let mut tables = self.tables.write().map_err(|_| MemoryStoreError::Poisoned)?;
        Ok(f(&mut tables))
    }
}

impl AttendanceStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>, Self::Error> {
        self.read(|t| t.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, Self::Error> {
        self.read(|t| t.employees.iter().find(|e| e.email == email).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        self.read(|t| {
            let mut employees = t.employees.clone();
            employees.sort_by(|a, b| a.name.cmp(&b.name));
            employees
        })
    }

    async fn insert_employee(&self, employee: Employee) -> Result<(), Self::Error> {
        self.write(|t| {
            if t.employees.iter().any(|e| e.email == employee.email) {
                return Err(MemoryStoreError::EmailTaken {
                    email: employee.email.clone(),
                });
            }
            t.employees.push(employee);
            Ok(())
        })?
    }

    async fn insert_shift(&self, shift: Shift) -> Result<(), Self::Error> {
        self.write(|t| t.shifts.push(shift))
    }

    async fn shifts_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Shift>, Self::Error> {
        self.read(|t| {
            let mut shifts: Vec<Shift> = t
                .shifts
                .iter()
                .filter(|s| from <= s.start_at && s.start_at < to)
                .cloned()
                .collect();
            shifts.sort_by_key(|s| (s.start_at, s.id));
            shifts
        })
    }

    async fn shifts_for_employee_on_day(
        &self,
        employee_id: Uuid,
        window: DayWindow,
    ) -> Result<Vec<Shift>, Self::Error> {
        self.read(|t| {
            let mut shifts: Vec<Shift> = t
                .shifts
                .iter()
                .filter(|s| s.employee_id == employee_id && window.contains(s.start_at))
                .cloned()
                .collect();
            shifts.sort_by_key(|s| (s.start_at, s.id));
            shifts
        })
    }

    async fn insert_punch(&self, punch: Punch) -> Result<(), Self::Error> {
        self.write(|t| t.punches.push(punch))
    }

    async fn punches_for_employee_on_day(
        &self,
        employee_id: Uuid,
        window: DayWindow,
    ) -> Result<Vec<Punch>, Self::Error> {
        self.read(|t| {
            let mut punches: Vec<Punch> = t
                .punches
                .iter()
                .filter(|p| p.employee_id == employee_id && window.contains(p.at))
                .cloned()
                .collect();
            punches.sort_by_key(|p| (p.at, p.id));
            punches
        })
    }

    async fn insert_alert_if_absent(&self, alert: LatenessAlert) -> Result<bool, Self::Error> {
        self.write(|t| {
            if t.alerts.iter().any(|a| a.punch_id == alert.punch_id) {
                return false;
            }
            t.alerts.push(alert);
            true
        })
    }

    async fn list_alerts(&self) -> Result<Vec<LatenessAlert>, Self::Error> {
        self.read(|t| {
            let mut alerts = t.alerts.clone();
            alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            alerts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchKind;
    use crate::reconciliation::civil_day_window;
    use chrono::{FixedOffset, TimeZone};

    fn employee(name: &str, email: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            active: true,
        }
    }

    fn shift(employee_id: Uuid, start: DateTime<Utc>) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            employee_id,
            boutique: None,
            start_at: start,
            end_at: start + chrono::Duration::hours(8),
            published: true,
        }
    }

    fn alert(punch_id: Uuid, created_at: DateTime<Utc>) -> LatenessAlert {
        LatenessAlert {
            id: Uuid::new_v4(),
            employee_id: Uuid::nil(),
            punch_id,
            shift_id: Uuid::nil(),
            minutes_late: 10,
            threshold_minutes: 5,
            created_at,
        }
    }

    #[tokio::test]
    async fn test_insert_employee_rejects_duplicate_email() {
        let store = MemoryStore::new();
        store
            .insert_employee(employee("Anna", "anna@example.com"))
            .await
            .unwrap();

        let duplicate = store
            .insert_employee(employee("Other Anna", "anna@example.com"))
            .await;
        assert!(matches!(
            duplicate,
            Err(MemoryStoreError::EmailTaken { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_employees_ordered_by_name() {
        let store = MemoryStore::new();
        store
            .insert_employee(employee("Zoé", "zoe@example.com"))
            .await
            .unwrap();
        store
            .insert_employee(employee("Anna", "anna@example.com"))
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_employees()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Anna", "Zoé"]);
    }

    #[tokio::test]
    async fn test_day_scoped_shift_query() {
        let store = MemoryStore::new();
        let emp = Uuid::new_v4();
        let offset = FixedOffset::east_opt(3600).unwrap();

        let today = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
        store.insert_shift(shift(emp, today)).await.unwrap();
        store.insert_shift(shift(emp, tomorrow)).await.unwrap();
        store.insert_shift(shift(Uuid::new_v4(), today)).await.unwrap();

        let window = civil_day_window(today, offset);
        let shifts = store.shifts_for_employee_on_day(emp, window).await.unwrap();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start_at, today);
    }

    #[tokio::test]
    async fn test_punches_returned_chronologically() {
        let store = MemoryStore::new();
        let emp = Uuid::new_v4();
        let offset = FixedOffset::east_opt(3600).unwrap();
        let base = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

        for minutes in [30i64, 0, 15] {
            store
                .insert_punch(Punch {
                    id: Uuid::new_v4(),
                    employee_id: emp,
                    kind: PunchKind::Entree,
                    at: base + chrono::Duration::minutes(minutes),
                })
                .await
                .unwrap();
        }

        let window = civil_day_window(base, offset);
        let punches = store.punches_for_employee_on_day(emp, window).await.unwrap();
        let offsets: Vec<i64> = punches
            .iter()
            .map(|p| (p.at - base).num_minutes())
            .collect();
        assert_eq!(offsets, vec![0, 15, 30]);
    }

    #[tokio::test]
    async fn test_alert_dedup_by_punch_id() {
        let store = MemoryStore::new();
        let punch_id = Uuid::new_v4();
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 9, 10, 0).unwrap();

        assert!(store.insert_alert_if_absent(alert(punch_id, at)).await.unwrap());
        assert!(!store.insert_alert_if_absent(alert(punch_id, at)).await.unwrap());

        assert_eq!(store.list_alerts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_alerts_listed_newest_first() {
        let store = MemoryStore::new();
        let older = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap();

        store.insert_alert_if_absent(alert(Uuid::new_v4(), older)).await.unwrap();
        store.insert_alert_if_absent(alert(Uuid::new_v4(), newer)).await.unwrap();

        let alerts = store.list_alerts().await.unwrap();
        assert_eq!(alerts[0].created_at, newer);
        assert_eq!(alerts[1].created_at, older);
    }
}
