//! Filter engine.
//!
//! Applies user-chosen [`FilterCriteria`] to a record set. Pure: the input is
//! never mutated and the output keeps the input order.

use crate::error::EngineResult;
use crate::models::{FilterCriteria, Record};

/// Keeps the records matching every criterion.
///
/// - `departments`: the record's department must be in the set.
/// - `approval`: the record's approval state must match.
/// - `date_range`: the record must intersect the range
///   (`start <= to && end >= from`), not merely lie inside it.
///
/// Unrestricted criteria return the input unchanged.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`](crate::error::EngineError::InvalidDateRange)
/// when the range starts after it ends.
///
/// # Example
///
/// ```
/// use vacation_engine::analysis::filter;
/// use vacation_engine::models::{ApprovalFilter, FilterCriteria, Record};
/// use chrono::NaiveDate;
///
/// let record = Record {
///     employee_id: "E1".to_string(),
///     employee_name: "Ana".to_string(),
///     department: "Sales".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     day_count: 5,
///     approved: false,
/// };
///
/// let criteria = FilterCriteria::default().with_approval(ApprovalFilter::Approved);
/// assert!(filter(&[record], &criteria).unwrap().is_empty());
/// ```
pub fn filter(records: &[Record], criteria: &FilterCriteria) -> EngineResult<Vec<Record>> {
    if let Some(range) = &criteria.date_range {
        range.check()?;
    }

    if criteria.is_unrestricted() {
        return Ok(records.to_vec());
    }

    Ok(records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect())
}

/// Returns true if a single record passes the criteria.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    if let Some(departments) = &criteria.departments {
        if !departments.contains(&record.department) {
            return false;
        }
    }

    if !criteria.approval.accepts(record.approved) {
        return false;
    }

    match &criteria.date_range {
        Some(range) => record.intersects(range.from, range.to),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{ApprovalFilter, DateRange};
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_record(id: &str, dept: &str, start: &str, end: &str, approved: bool) -> Record {
        let start_date = make_date(start);
        let end_date = make_date(end);
        Record {
            employee_id: id.to_string(),
            employee_name: format!("Name {}", id),
            department: dept.to_string(),
            start_date,
            end_date,
            day_count: ((end_date - start_date).num_days() + 1) as u32,
            approved,
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            create_record("E1", "Marketing", "2024-07-01", "2024-07-10", true),
            create_record("E2", "Marketing", "2024-07-15", "2024-07-20", false),
            create_record("E3", "Ventas", "2024-08-01", "2024-08-05", true),
            create_record("E4", "RRHH", "2024-06-25", "2024-07-02", false),
        ]
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.employee_id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = sample_records();
        let filtered = filter(&records, &FilterCriteria::default()).unwrap();
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_department_filter() {
        let records = sample_records();
        let criteria = FilterCriteria::default().with_departments(["Marketing"]);
        assert_eq!(ids(&filter(&records, &criteria).unwrap()), vec!["E1", "E2"]);

        let criteria = FilterCriteria::default().with_departments(["Marketing", "Ventas"]);
        assert_eq!(
            ids(&filter(&records, &criteria).unwrap()),
            vec!["E1", "E2", "E3"]
        );
    }

    #[test]
    fn test_empty_department_set_keeps_nothing() {
        let records = sample_records();
        let criteria = FilterCriteria::default().with_departments(Vec::<String>::new());
        assert!(filter(&records, &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_department_match_is_case_sensitive() {
        let records = sample_records();
        let criteria = FilterCriteria::default().with_departments(["marketing"]);
        assert!(filter(&records, &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_approval_filter() {
        let records = sample_records();
        let approved = FilterCriteria::default().with_approval(ApprovalFilter::Approved);
        assert_eq!(ids(&filter(&records, &approved).unwrap()), vec!["E1", "E3"]);

        let pending = FilterCriteria::default().with_approval(ApprovalFilter::Pending);
        assert_eq!(ids(&filter(&records, &pending).unwrap()), vec!["E2", "E4"]);
    }

    #[test]
    fn test_date_range_keeps_intersecting_records() {
        let records = sample_records();
        let range = DateRange::new(make_date("2024-07-01"), make_date("2024-07-15")).unwrap();
        let criteria = FilterCriteria::default().with_date_range(range);

        // E4 starts before the range and E2 starts on its last day.
        assert_eq!(
            ids(&filter(&records, &criteria).unwrap()),
            vec!["E1", "E2", "E4"]
        );
    }

    #[test]
    fn test_date_range_boundary_days_are_inclusive() {
        let records = vec![create_record("E1", "IT", "2024-01-01", "2024-01-05", true)];

        let ends_on_from = DateRange::new(make_date("2024-01-05"), make_date("2024-01-09")).unwrap();
        let criteria = FilterCriteria::default().with_date_range(ends_on_from);
        assert_eq!(filter(&records, &criteria).unwrap().len(), 1);

        let after = DateRange::new(make_date("2024-01-06"), make_date("2024-01-09")).unwrap();
        let criteria = FilterCriteria::default().with_date_range(after);
        assert!(filter(&records, &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let records = sample_records();
        let range = DateRange::new(make_date("2024-06-01"), make_date("2024-07-31")).unwrap();
        let criteria = FilterCriteria::default()
            .with_departments(["Marketing", "RRHH"])
            .with_approval(ApprovalFilter::Pending)
            .with_date_range(range);
        assert_eq!(ids(&filter(&records, &criteria).unwrap()), vec!["E2", "E4"]);
    }

    #[test]
    fn test_reversed_range_fails_fast() {
        let records = sample_records();
        let criteria = FilterCriteria {
            date_range: Some(DateRange {
                from: make_date("2024-02-01"),
                to: make_date("2024-01-01"),
            }),
            ..FilterCriteria::default()
        };

        match filter(&records, &criteria) {
            Err(EngineError::InvalidDateRange { from, to }) => {
                assert_eq!(from, make_date("2024-02-01"));
                assert_eq!(to, make_date("2024-01-01"));
            }
            _ => panic!("Expected InvalidDateRange error"),
        }
    }

    #[test]
    fn test_reversed_range_fails_even_on_empty_input() {
        let criteria = FilterCriteria {
            date_range: Some(DateRange {
                from: make_date("2024-02-01"),
                to: make_date("2024-01-01"),
            }),
            ..FilterCriteria::default()
        };
        assert!(filter(&[], &criteria).is_err());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = sample_records();
        let before = records.clone();
        let criteria = FilterCriteria::default().with_approval(ApprovalFilter::Approved);
        let _ = filter(&records, &criteria).unwrap();
        assert_eq!(records, before);
    }
}
