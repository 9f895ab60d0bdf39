//! Conflict models produced by the conflict detector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

/// How serious a conflict is.
///
/// # Example
///
/// ```
/// use vacation_engine::models::ConflictSeverity;
///
/// assert_eq!(ConflictSeverity::from_approvals(true, true), ConflictSeverity::Hard);
/// assert_eq!(ConflictSeverity::from_approvals(true, false), ConflictSeverity::Soft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSeverity {
    /// Both vacations are approved.
    Hard,
    /// At least one vacation is still pending and may not happen.
    Soft,
}

impl ConflictSeverity {
    /// Classifies a pair from the approval flags of its two records.
    pub fn from_approvals(a_approved: bool, b_approved: bool) -> Self {
        if a_approved && b_approved {
            ConflictSeverity::Hard
        } else {
            ConflictSeverity::Soft
        }
    }
}

impl std::fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictSeverity::Hard => write!(f, "hard"),
            ConflictSeverity::Soft => write!(f, "soft"),
        }
    }
}

/// Two same-department records whose intervals intersect.
///
/// `record_a` always comes earlier in the analysed sequence than `record_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    /// Position of `record_a` in the analysed sequence.
    pub index_a: usize,
    /// Position of `record_b` in the analysed sequence.
    pub index_b: usize,
    /// The earlier record.
    pub record_a: Record,
    /// The later record.
    pub record_b: Record,
    /// Department shared by both records.
    pub department: String,
    /// First shared day.
    pub overlap_start: NaiveDate,
    /// Last shared day.
    pub overlap_end: NaiveDate,
    /// Number of shared days, counting both ends.
    pub overlap_days: u32,
    /// Hard when both records are approved, soft otherwise.
    pub severity: ConflictSeverity,
}

impl ConflictPair {
    /// Returns true when both records are approved.
    pub fn is_hard(&self) -> bool {
        self.severity == ConflictSeverity::Hard
    }
}

/// A record that collides with the summarized one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingEntry {
    /// Position of the other record in the analysed sequence.
    pub index: usize,
    /// The other employee's id.
    pub employee_id: String,
    /// The other employee's name.
    pub employee_name: String,
    /// Start of the other vacation.
    pub start_date: NaiveDate,
    /// End of the other vacation.
    pub end_date: NaiveDate,
    /// Severity of this particular collision.
    pub severity: ConflictSeverity,
}

/// Per-record view of the conflicts it takes part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeConflicts {
    /// Position of the summarized record in the analysed sequence.
    pub index: usize,
    /// Employee id of the summarized record.
    pub employee_id: String,
    /// Employee name of the summarized record.
    pub employee_name: String,
    /// Department of the summarized record.
    pub department: String,
    /// Records colliding with this one, in order of discovery.
    pub conflicts_with: Vec<ConflictingEntry>,
}

impl EmployeeConflicts {
    /// Short human-readable list of the colliding employees.
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self
            .conflicts_with
            .iter()
            .map(|entry| entry.employee_name.as_str())
            .collect();
        format!("Conflicts with: {}", names.join(", "))
    }
}
