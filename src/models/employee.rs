//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! punches and shifts the engine reconciles. Employees are created and
//! edited by manager-facing workflows; the engine itself only reads them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an employee tracked by the attendance system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The employee's contact email, unique across the system.
    pub email: String,
    /// Whether the employee is currently active.
    pub active: bool,
}
