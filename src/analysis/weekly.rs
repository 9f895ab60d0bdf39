//! Weekly bucketing.
//!
//! Weeks are ISO weeks starting on Monday. A record counts once in every
//! week it touches, so a vacation from a Friday to the following Tuesday
//! appears in two buckets.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Record, WeeklyBucket, WeeklyEntry, WeeklyStats};

/// Returns the Monday of the ISO week containing `date`.
///
/// # Example
///
/// ```
/// use vacation_engine::analysis::week_start;
/// use chrono::NaiveDate;
///
/// // 2024-01-07 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Builds contiguous weekly buckets from the earliest start to the latest
/// end, empty weeks included. Empty input yields no buckets.
pub fn weekly_buckets(records: &[Record]) -> Vec<WeeklyBucket> {
    let first = records.iter().map(|r| week_start(r.start_date)).min();
    let last = records.iter().map(|r| week_start(r.end_date)).max();
    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };

    let mut buckets: Vec<WeeklyBucket> = Vec::new();
    let mut monday = Some(first);
    while let Some(current) = monday.filter(|m| *m <= last) {
        let iso = current.iso_week();
        buckets.push(WeeklyBucket {
            week_start: current,
            iso_year: iso.year(),
            iso_week: iso.week(),
            record_count: 0,
            entries: Vec::new(),
        });
        monday = current.checked_add_days(Days::new(7));
    }

    for record in records {
        let mut monday = Some(week_start(record.start_date));
        while let Some(current) = monday.filter(|m| *m <= record.end_date) {
            let slot = week_offset(first, current);
            if let Some(bucket) = buckets.get_mut(slot) {
                bucket.record_count += 1;
                bucket.entries.push(WeeklyEntry {
                    employee_id: record.employee_id.clone(),
                    employee_name: record.employee_name.clone(),
                    department: record.department.clone(),
                });
            }
            monday = current.checked_add_days(Days::new(7));
        }
    }

    buckets
}

fn week_offset(first: NaiveDate, monday: NaiveDate) -> usize {
    usize::try_from((monday - first).num_days() / 7).unwrap_or(usize::MAX)
}

/// Computes peak, mean and non-empty week count over buckets.
pub fn weekly_stats(buckets: &[WeeklyBucket]) -> WeeklyStats {
    if buckets.is_empty() {
        return WeeklyStats::default();
    }

    let total: u64 = buckets.iter().map(|b| b.record_count as u64).sum();
    WeeklyStats {
        peak_count: buckets.iter().map(|b| b.record_count).max().unwrap_or(0),
        mean_count: Decimal::from(total) / Decimal::from(buckets.len() as u64),
        weeks_with_absences: buckets.iter().filter(|b| b.record_count > 0).count(),
    }
}
