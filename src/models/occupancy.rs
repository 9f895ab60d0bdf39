//! Occupancy models: who is away, per department.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of a department's employees currently on leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPresence {
    /// Department name.
    pub department: String,
    /// Distinct employees known in the department.
    pub total_employees: usize,
    /// Distinct employees of the department currently on leave.
    pub employees_on_leave: usize,
    /// `employees_on_leave / total_employees * 100`.
    pub percentage_on_leave: Decimal,
}
