//! End-to-end analysis over a validated record set.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AggregateSnapshot, ConflictPair, EmployeeConflicts, FilterCriteria, Record};

use super::aggregation::aggregate;
use super::conflicts::{conflicting_departments, detect_conflicts_sweep, summarize_by_employee};
use super::filter::filter;

/// Result of one filter + conflict + aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Records that passed the criteria, in input order.
    pub filtered: Vec<Record>,
    /// Overlapping pairs within the filtered set.
    pub conflicts: Vec<ConflictPair>,
    /// Conflicts regrouped per involved record.
    pub employee_conflicts: Vec<EmployeeConflicts>,
    /// Departments with at least one conflict.
    pub conflicting_departments: Vec<String>,
    /// Aggregates over the filtered set.
    pub snapshot: AggregateSnapshot,
}

impl AnalysisReport {
    /// Number of conflicts where both sides are approved.
    pub fn hard_conflict_count(&self) -> usize {
        self.conflicts.iter().filter(|c| c.is_hard()).count()
    }
}

/// Filters `records`, then detects conflicts and aggregates the result.
///
/// # Errors
///
/// Fails only when the criteria carry a reversed date range.
pub fn analyze(records: &[Record], criteria: &FilterCriteria) -> EngineResult<AnalysisReport> {
    let filtered = filter(records, criteria)?;
    let conflicts = detect_conflicts_sweep(&filtered);
    let employee_conflicts = summarize_by_employee(&conflicts);
    let conflicting_departments = conflicting_departments(&conflicts);
    let snapshot = aggregate(&filtered);

    Ok(AnalysisReport {
        filtered,
        conflicts,
        employee_conflicts,
        conflicting_departments,
        snapshot,
    })
}
