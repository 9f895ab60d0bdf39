//! Occupancy queries: who is away on a given day.
//!
//! The reference date is always passed in, so these stay pure and testable.
//! Only approved vacations count as someone being away.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DepartmentPresence, Record};

use super::aggregation::ratio;

/// Approved records covering `date`, in input order.
///
/// # Example
///
/// ```
/// use vacation_engine::analysis::on_leave_at;
/// use vacation_engine::models::Record;
/// use chrono::NaiveDate;
///
/// let record = Record {
///     employee_id: "E1".to_string(),
///     employee_name: "Ana".to_string(),
///     department: "IT".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     day_count: 5,
///     approved: true,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(on_leave_at(&[record], today).len(), 1);
/// ```
pub fn on_leave_at(records: &[Record], date: NaiveDate) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.approved && r.contains_date(date))
        .cloned()
        .collect()
}

/// Approved records starting strictly after `after`, earliest first.
///
/// Ties keep input order. At most `limit` records are returned.
pub fn upcoming_leave(records: &[Record], after: NaiveDate, limit: usize) -> Vec<Record> {
    let mut upcoming: Vec<&Record> = records
        .iter()
        .filter(|r| r.approved && r.start_date > after)
        .collect();
    upcoming.sort_by_key(|r| r.start_date);
    upcoming.into_iter().take(limit).cloned().collect()
}

/// Days left until `record` ends, counted from `date`.
///
/// Zero on the last day; negative once the record has ended.
pub fn remaining_days(record: &Record, date: NaiveDate) -> i64 {
    (record.end_date - date).num_days()
}

/// Share of each department's employees that is on leave.
///
/// Departments come from `all_records` in order of first appearance;
/// employees are counted by distinct id. Departments with nobody away
/// report zero.
pub fn department_presence(
    all_records: &[Record],
    on_leave: &[Record],
) -> Vec<DepartmentPresence> {
    let mut order: Vec<&str> = Vec::new();
    let mut staff: HashMap<&str, HashSet<&str>> = HashMap::new();
    for record in all_records {
        let department = record.department.as_str();
        staff
            .entry(department)
            .or_insert_with(|| {
                order.push(department);
                HashSet::new()
            })
            .insert(record.employee_id.as_str());
    }

    let mut away: HashMap<&str, HashSet<&str>> = HashMap::new();
    for record in on_leave {
        away.entry(record.department.as_str())
            .or_default()
            .insert(record.employee_id.as_str());
    }

    order
        .into_iter()
        .map(|department| {
            let total_employees = staff.get(department).map_or(0, HashSet::len);
            let employees_on_leave = away.get(department).map_or(0, HashSet::len);
            DepartmentPresence {
                department: department.to_string(),
                total_employees,
                employees_on_leave,
                percentage_on_leave: ratio(employees_on_leave as u64, total_employees as u64)
                    * Decimal::ONE_HUNDRED,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_record(id: &str, dept: &str, start: &str, end: &str, approved: bool) -> Record {
        Record {
            employee_id: id.to_string(),
            employee_name: format!("Name {}", id),
            department: dept.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            day_count: 1,
            approved,
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            create_record("Current1", "Marketing", "2024-07-01", "2024-07-10", true),
            create_record("Current2", "Ventas", "2024-07-05", "2024-07-05", true),
            create_record("Future1", "Marketing", "2024-07-20", "2024-07-25", true),
            create_record("Past1", "RRHH", "2024-06-01", "2024-06-10", true),
            create_record("Pending", "Ventas", "2024-07-01", "2024-07-31", false),
            create_record("Future0", "RRHH", "2024-07-08", "2024-07-09", true),
        ]
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.employee_id.as_str()).collect()
    }

    #[test]
    fn test_on_leave_at_only_current_approved() {
        let current = on_leave_at(&sample_records(), make_date("2024-07-05"));
        assert_eq!(ids(&current), vec!["Current1", "Current2"]);
    }

    #[test]
    fn test_on_leave_at_boundaries_inclusive() {
        let records = sample_records();
        assert_eq!(ids(&on_leave_at(&records, make_date("2024-07-10"))), vec!["Current1"]);
        assert!(on_leave_at(&records, make_date("2024-07-11")).is_empty());
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let records = sample_records();
        let upcoming = upcoming_leave(&records, make_date("2024-07-05"), 10);
        assert_eq!(ids(&upcoming), vec!["Future0", "Future1"]);

        let limited = upcoming_leave(&records, make_date("2024-07-05"), 1);
        assert_eq!(ids(&limited), vec!["Future0"]);
    }

    #[test]
    fn test_upcoming_excludes_pending() {
        let records = vec![create_record("P", "IT", "2024-08-01", "2024-08-02", false)];
        assert!(upcoming_leave(&records, make_date("2024-07-01"), 10).is_empty());
    }

    #[test]
    fn test_remaining_days() {
        let record = create_record("E1", "IT", "2024-07-01", "2024-07-10", true);
        assert_eq!(remaining_days(&record, make_date("2024-07-05")), 5);
        assert_eq!(remaining_days(&record, make_date("2024-07-10")), 0);
    }

    #[test]
    fn test_department_presence() {
        let records = sample_records();
        let current = on_leave_at(&records, make_date("2024-07-05"));
        let presence = department_presence(&records, &current);

        let names: Vec<&str> = presence.iter().map(|p| p.department.as_str()).collect();
        assert_eq!(names, vec!["Marketing", "Ventas", "RRHH"]);

        assert_eq!(presence[0].total_employees, 2);
        assert_eq!(presence[0].employees_on_leave, 1);
        assert_eq!(presence[0].percentage_on_leave, Decimal::from(50));

        assert_eq!(presence[2].employees_on_leave, 0);
        assert_eq!(presence[2].percentage_on_leave, Decimal::ZERO);
    }

    #[test]
    fn test_department_presence_full_department() {
        let records = vec![
            create_record("A", "Marketing", "2024-07-01", "2024-07-10", true),
            create_record("B", "Marketing", "2024-07-02", "2024-07-10", true),
        ];
        let current = on_leave_at(&records, make_date("2024-07-05"));
        let presence = department_presence(&records, &current);
        assert_eq!(presence[0].percentage_on_leave, Decimal::from(100));
    }
}
