//! Aggregate statistics models.
//!
//! This module contains the [`AggregateSnapshot`] type and its parts, the
//! output of the aggregation engine over a (usually filtered) record set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of one department's vacation load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department name.
    pub department: String,
    /// Number of vacation records.
    pub record_count: usize,
    /// Sum of the recorded day counts.
    pub total_days: u64,
    /// Records that are approved.
    pub approved_count: usize,
    /// Records still pending approval.
    pub pending_count: usize,
    /// Distinct employee ids.
    pub distinct_employees: usize,
    /// Mean recorded days per record.
    pub average_days_per_record: Decimal,
    /// Recorded days divided by distinct employees.
    pub average_days_per_employee: Decimal,
}

/// A record's presence inside a weekly bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    /// Employee id of the record.
    pub employee_id: String,
    /// Employee name of the record.
    pub employee_name: String,
    /// Department of the record.
    pub department: String,
}

/// One ISO week and the records touching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week number (1-53).
    pub iso_week: u32,
    /// Number of records touching this week.
    pub record_count: usize,
    /// The records touching this week, in input order.
    pub entries: Vec<WeeklyEntry>,
}

/// Headline figures over the weekly buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Highest record count of any week.
    pub peak_count: usize,
    /// Mean record count over all buckets, empty weeks included.
    pub mean_count: Decimal,
    /// Weeks with at least one record.
    pub weeks_with_absences: usize,
}

/// Dataset-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalTotals {
    /// Number of vacation records.
    pub record_count: usize,
    /// Distinct employee ids on vacation.
    pub distinct_employees: usize,
    /// Sum of the recorded day counts.
    pub total_days: u64,
    /// Approved records.
    pub approved_count: usize,
    /// Pending records.
    pub pending_count: usize,
    /// `approved_count / record_count`, zero when there are no records.
    pub approval_ratio: Decimal,
    /// Mean recorded days per record, zero when there are no records.
    pub average_days: Decimal,
}

/// Aggregate statistics over a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    /// Per-department summaries in order of first appearance.
    pub departments: Vec<DepartmentSummary>,
    /// Contiguous ISO weeks from the earliest start to the latest end.
    pub weekly: Vec<WeeklyBucket>,
    /// Headline figures over `weekly`.
    pub weekly_stats: WeeklyStats,
    /// Dataset-wide totals.
    pub totals: GlobalTotals,
}

impl AggregateSnapshot {
    /// Looks up a department summary by name.
    pub fn department(&self, name: &str) -> Option<&DepartmentSummary> {
        self.departments.iter().find(|d| d.department == name)
    }

    /// Looks up the bucket whose week contains `date`.
    pub fn week_containing(&self, date: NaiveDate) -> Option<&WeeklyBucket> {
        self.weekly.iter().find(|bucket| {
            bucket.week_start <= date && date < bucket.week_start + chrono::Days::new(7)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_all_zero() {
        let snapshot = AggregateSnapshot::default();
        assert!(snapshot.departments.is_empty());
        assert!(snapshot.weekly.is_empty());
        assert_eq!(snapshot.totals.record_count, 0);
        assert_eq!(snapshot.totals.approval_ratio, Decimal::ZERO);
        assert_eq!(snapshot.weekly_stats.peak_count, 0);
    }

    #[test]
    fn test_decimals_serialize_as_strings() {
        let totals = GlobalTotals {
            approval_ratio: Decimal::new(5, 1),
            ..GlobalTotals::default()
        };
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["approval_ratio"], "0.5");
    }

    #[test]
    fn test_week_containing_finds_bucket() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snapshot = AggregateSnapshot {
            weekly: vec![WeeklyBucket {
                week_start: monday,
                iso_year: 2024,
                iso_week: 1,
                record_count: 0,
                entries: vec![],
            }],
            ..AggregateSnapshot::default()
        };
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(snapshot.week_containing(sunday).is_some());
        assert!(snapshot.week_containing(next_monday).is_none());
    }
}
