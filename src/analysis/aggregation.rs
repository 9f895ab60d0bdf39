//! Aggregation engine.
//!
//! Computes department summaries, weekly buckets and global totals over a
//! record set. Pure and total: empty input yields an all-zero snapshot.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{AggregateSnapshot, DepartmentSummary, GlobalTotals, Record};

use super::weekly::{weekly_buckets, weekly_stats};

/// Aggregates a record set.
///
/// # Example
///
/// ```
/// use vacation_engine::analysis::aggregate;
///
/// let snapshot = aggregate(&[]);
/// assert_eq!(snapshot.totals.record_count, 0);
/// assert!(snapshot.totals.approval_ratio.is_zero());
/// ```
pub fn aggregate(records: &[Record]) -> AggregateSnapshot {
    let weekly = weekly_buckets(records);
    let weekly_stats = weekly_stats(&weekly);

    AggregateSnapshot {
        departments: department_summaries(records),
        weekly,
        weekly_stats,
        totals: global_totals(records),
    }
}

/// Summarizes each department, in order of first appearance.
pub fn department_summaries(records: &[Record]) -> Vec<DepartmentSummary> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();

    for record in records {
        let department = record.department.as_str();
        let slot = *slots.entry(department).or_insert_with(|| {
            groups.push((department, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
        .into_iter()
        .map(|(department, members)| {
            let record_count = members.len();
            let total_days: u64 = members.iter().map(|r| u64::from(r.day_count)).sum();
            let approved_count = members.iter().filter(|r| r.approved).count();
            let distinct_employees = members
                .iter()
                .map(|r| r.employee_id.as_str())
                .collect::<HashSet<_>>()
                .len();

            DepartmentSummary {
                department: department.to_string(),
                record_count,
                total_days,
                approved_count,
                pending_count: record_count - approved_count,
                distinct_employees,
                average_days_per_record: ratio(total_days, record_count as u64),
                average_days_per_employee: ratio(total_days, distinct_employees as u64),
            }
        })
        .collect()
}

/// Computes dataset-wide totals.
pub fn global_totals(records: &[Record]) -> GlobalTotals {
    let record_count = records.len();
    let total_days: u64 = records.iter().map(|r| u64::from(r.day_count)).sum();
    let approved_count = records.iter().filter(|r| r.approved).count();
    let distinct_employees = records
        .iter()
        .map(|r| r.employee_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    GlobalTotals {
        record_count,
        distinct_employees,
        total_days,
        approved_count,
        pending_count: record_count - approved_count,
        approval_ratio: ratio(approved_count as u64, record_count as u64),
        average_days: ratio(total_days, record_count as u64),
    }
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub(crate) fn ratio(numerator: u64, denominator: u64) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(numerator) / Decimal::from(denominator)
}
