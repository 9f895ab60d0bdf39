//! Vacation record model.
//!
//! A [`Record`] is the validated, typed form of one vacation entry. It is
//! built once by the validator and every downstream component works on it
//! directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's vacation span.
///
/// Invariants guaranteed by the validator: `start_date <= end_date`,
/// `day_count >= 1`, and non-empty `employee_id`, `employee_name` and
/// `department`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Opaque employee identifier. An employee may own several records.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Department name, the case-sensitive grouping key for conflicts.
    pub department: String,
    /// First day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the vacation (inclusive).
    pub end_date: NaiveDate,
    /// Number of vacation days as recorded in the source.
    pub day_count: u32,
    /// Whether the vacation has been approved.
    pub approved: bool,
}

impl Record {
    /// Returns the number of calendar days covered, counting both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::Record;
    /// use chrono::NaiveDate;
    ///
    /// let record = Record {
    ///     employee_id: "E001".to_string(),
    ///     employee_name: "Ana".to_string(),
    ///     department: "Sales".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     day_count: 10,
    ///     approved: true,
    /// };
    /// assert_eq!(record.span_days(), 10);
    /// ```
    pub fn span_days(&self) -> i64 {
        inclusive_days(self.start_date, self.end_date)
    }

    /// Returns true if the record covers `date`, both ends inclusive.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns true if the record intersects the inclusive range `[from, to]`.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }

    /// Returns true if the two records share at least one calendar day.
    ///
    /// Boundaries are inclusive: a vacation ending on the day another starts
    /// overlaps it.
    pub fn overlaps(&self, other: &Record) -> bool {
        self.intersects(other.start_date, other.end_date)
    }

    /// Returns the shared `(start, end)` window with `other`, if any.
    pub fn overlap_window(&self, other: &Record) -> Option<(NaiveDate, NaiveDate)> {
        if !self.overlaps(other) {
            return None;
        }
        Some((
            self.start_date.max(other.start_date),
            self.end_date.min(other.end_date),
        ))
    }
}

/// Number of days in `[start, end]`, counting both ends.
pub(crate) fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
