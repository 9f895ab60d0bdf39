//! Conflict detection.
//!
//! This module finds every pair of same-department records whose vacation
//! intervals share at least one day. Boundaries are inclusive: a vacation
//! ending on the day another starts is a conflict.
//!
//! Two implementations are provided with identical output:
//! - [`detect_conflicts`] compares every pair inside each department,
//!   O(n²) per department.
//! - [`detect_conflicts_sweep`] sorts each department by start date and keeps
//!   an active set, O(n log n + k) per department for k conflicts.
//!
//! Output order: departments in order of first appearance, then by the
//! earlier record's position, then by the later record's position.

use std::collections::HashMap;

use crate::models::{
    ConflictPair, ConflictSeverity, ConflictingEntry, EmployeeConflicts, Record, inclusive_days,
};

/// The records of one department, by position in the analysed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPartition<'a> {
    /// Department name.
    pub department: &'a str,
    /// Positions of the department's records, ascending.
    pub indices: Vec<usize>,
}

/// Groups record positions by department, in order of first appearance.
///
/// # Example
///
/// ```
/// use vacation_engine::analysis::partition_by_department;
/// use vacation_engine::models::Record;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let record = |dept: &str| Record {
///     employee_id: "E".to_string(),
///     employee_name: "N".to_string(),
///     department: dept.to_string(),
///     start_date: day,
///     end_date: day,
///     day_count: 1,
///     approved: true,
/// };
///
/// let records = vec![record("IT"), record("Sales"), record("IT")];
/// let partitions = partition_by_department(&records);
/// assert_eq!(partitions[0].department, "IT");
/// assert_eq!(partitions[0].indices, vec![0, 2]);
/// assert_eq!(partitions[1].indices, vec![1]);
/// ```
pub fn partition_by_department(records: &[Record]) -> Vec<DepartmentPartition<'_>> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut partitions: Vec<DepartmentPartition<'_>> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let department = record.department.as_str();
        let slot = *slots.entry(department).or_insert_with(|| {
            partitions.push(DepartmentPartition {
                department,
                indices: Vec::new(),
            });
            partitions.len() - 1
        });
        partitions[slot].indices.push(index);
    }

    partitions
}

/// Finds all same-department overlapping pairs by pairwise comparison.
///
/// Total over any record sequence; empty, single-record and fully disjoint
/// inputs yield an empty result.
pub fn detect_conflicts(records: &[Record]) -> Vec<ConflictPair> {
    let mut conflicts = Vec::new();

    for partition in partition_by_department(records) {
        let indices = &partition.indices;
        for (offset, &i) in indices.iter().enumerate() {
            for &j in &indices[offset + 1..] {
                if let Some(pair) = build_pair(records, i, j) {
                    conflicts.push(pair);
                }
            }
        }
    }

    conflicts
}

/// Finds all same-department overlapping pairs with a sweep line.
///
/// Produces exactly the output of [`detect_conflicts`], in the same order.
pub fn detect_conflicts_sweep(records: &[Record]) -> Vec<ConflictPair> {
    let mut conflicts = Vec::new();

    for partition in partition_by_department(records) {
        let mut by_start = partition.indices.clone();
        by_start.sort_by_key(|&i| (records[i].start_date, i));

        let mut active: Vec<usize> = Vec::new();
        let mut pairs: Vec<(usize, usize)> = Vec::new();

        for &current in &by_start {
            let start = records[current].start_date;
            active.retain(|&open| records[open].end_date >= start);

            // Every remaining active record started no later than `current`
            // and ends on or after its start.
            for &open in &active {
                pairs.push((open.min(current), open.max(current)));
            }
            active.push(current);
        }

        pairs.sort_unstable();
        conflicts.extend(pairs.into_iter().filter_map(|(i, j)| build_pair(records, i, j)));
    }

    conflicts
}

fn build_pair(records: &[Record], i: usize, j: usize) -> Option<ConflictPair> {
    let a = &records[i];
    let b = &records[j];
    let (overlap_start, overlap_end) = a.overlap_window(b)?;
    let overlap_days =
        u32::try_from(inclusive_days(overlap_start, overlap_end)).unwrap_or(u32::MAX);

    Some(ConflictPair {
        index_a: i,
        index_b: j,
        record_a: a.clone(),
        record_b: b.clone(),
        department: a.department.clone(),
        overlap_start,
        overlap_end,
        overlap_days,
        severity: ConflictSeverity::from_approvals(a.approved, b.approved),
    })
}

/// Regroups conflicts per record.
///
/// Each record taking part in at least one conflict gets one entry, in order
/// of first appearance in `conflicts`; its colliding records keep the order
/// in which they were discovered.
pub fn summarize_by_employee(conflicts: &[ConflictPair]) -> Vec<EmployeeConflicts> {
    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut summaries: Vec<EmployeeConflicts> = Vec::new();

    let mut note = |index: usize,
                    own: &Record,
                    other_index: usize,
                    other: &Record,
                    pair: &ConflictPair| {
        let slot = *slots.entry(index).or_insert_with(|| {
            summaries.push(EmployeeConflicts {
                index,
                employee_id: own.employee_id.clone(),
                employee_name: own.employee_name.clone(),
                department: own.department.clone(),
                conflicts_with: Vec::new(),
            });
            summaries.len() - 1
        });
        summaries[slot].conflicts_with.push(ConflictingEntry {
            index: other_index,
            employee_id: other.employee_id.clone(),
            employee_name: other.employee_name.clone(),
            start_date: other.start_date,
            end_date: other.end_date,
            severity: pair.severity,
        });
    };

    for pair in conflicts {
        note(pair.index_a, &pair.record_a, pair.index_b, &pair.record_b, pair);
        note(pair.index_b, &pair.record_b, pair.index_a, &pair.record_a, pair);
    }

    summaries
}

/// Departments with at least one conflict, in order of first appearance.
pub fn conflicting_departments(conflicts: &[ConflictPair]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for pair in conflicts {
        if !departments.contains(&pair.department) {
            departments.push(pair.department.clone());
        }
    }
    departments
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_record(name: &str, dept: &str, start: &str, end: &str, approved: bool) -> Record {
        let start_date = make_date(start);
        let end_date = make_date(end);
        Record {
            employee_id: format!("id_{}", name),
            employee_name: name.to_string(),
            department: dept.to_string(),
            start_date,
            end_date,
            day_count: ((end_date - start_date).num_days() + 1) as u32,
            approved,
        }
    }

    /// Four records: three Marketing overlapping, one Ventas.
    fn marketing_records() -> Vec<Record> {
        vec![
            create_record("Alice", "Marketing", "2024-07-01", "2024-07-10", true),
            create_record("Bob", "Marketing", "2024-07-05", "2024-07-12", true),
            create_record("Charlie", "Ventas", "2024-07-01", "2024-07-08", true),
            create_record("Diana", "Marketing", "2024-07-03", "2024-07-06", true),
        ]
    }

    fn index_pairs(conflicts: &[ConflictPair]) -> Vec<(usize, usize)> {
        conflicts.iter().map(|c| (c.index_a, c.index_b)).collect()
    }

    #[test]
    fn test_empty_input_has_no_conflicts() {
        assert!(detect_conflicts(&[]).is_empty());
        assert!(detect_conflicts_sweep(&[]).is_empty());
    }

    #[test]
    fn test_single_record_has_no_conflicts() {
        let records = vec![create_record("A", "IT", "2024-01-01", "2024-01-05", true)];
        assert!(detect_conflicts(&records).is_empty());
    }

    #[test]
    fn test_adjacent_boundary_day_is_a_conflict() {
        let records = vec![
            create_record("A", "IT", "2024-01-01", "2024-01-05", true),
            create_record("B", "IT", "2024-01-05", "2024-01-10", true),
        ];

        let conflicts = detect_conflicts(&records);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].overlap_start, make_date("2024-01-05"));
        assert_eq!(conflicts[0].overlap_end, make_date("2024-01-05"));
        assert_eq!(conflicts[0].overlap_days, 1);
    }

    #[test]
    fn test_consecutive_vacations_do_not_conflict() {
        let records = vec![
            create_record("A", "IT", "2024-01-01", "2024-01-05", true),
            create_record("B", "IT", "2024-01-06", "2024-01-10", true),
        ];
        assert!(detect_conflicts(&records).is_empty());
        assert!(detect_conflicts_sweep(&records).is_empty());
    }

    #[test]
    fn test_identical_ranges_in_different_departments_never_conflict() {
        let records = vec![
            create_record("A", "IT", "2024-01-01", "2024-01-05", true),
            create_record("B", "Sales", "2024-01-01", "2024-01-05", true),
        ];
        assert!(detect_conflicts(&records).is_empty());
        assert!(detect_conflicts_sweep(&records).is_empty());
    }

    #[test]
    fn test_multi_way_overlap_reports_each_pair_once() {
        let records = marketing_records();
        let conflicts = detect_conflicts(&records);

        assert_eq!(index_pairs(&conflicts), vec![(0, 1), (0, 3), (1, 3)]);
        assert!(conflicts.iter().all(|c| c.department == "Marketing"));
    }

    #[test]
    fn test_overlap_window_and_days() {
        let conflicts = detect_conflicts(&marketing_records());

        // Alice 07-01..07-10 vs Bob 07-05..07-12
        assert_eq!(conflicts[0].overlap_start, make_date("2024-07-05"));
        assert_eq!(conflicts[0].overlap_end, make_date("2024-07-10"));
        assert_eq!(conflicts[0].overlap_days, 6);

        // Bob 07-05..07-12 vs Diana 07-03..07-06
        assert_eq!(conflicts[2].overlap_start, make_date("2024-07-05"));
        assert_eq!(conflicts[2].overlap_end, make_date("2024-07-06"));
        assert_eq!(conflicts[2].overlap_days, 2);
    }

    #[test]
    fn test_severity_classification() {
        let records = vec![
            create_record("A", "IT", "2024-01-01", "2024-01-10", true),
            create_record("B", "IT", "2024-01-05", "2024-01-06", true),
            create_record("C", "IT", "2024-01-08", "2024-01-09", false),
        ];
        let conflicts = detect_conflicts(&records);

        assert_eq!(index_pairs(&conflicts), vec![(0, 1), (0, 2)]);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Hard);
        assert!(conflicts[0].is_hard());
        assert_eq!(conflicts[1].severity, ConflictSeverity::Soft);
    }

    #[test]
    fn test_output_grouped_by_department_first_appearance() {
        let records = vec![
            create_record("A", "Sales", "2024-01-01", "2024-01-10", true),
            create_record("B", "IT", "2024-01-01", "2024-01-10", true),
            create_record("C", "IT", "2024-01-02", "2024-01-03", true),
            create_record("D", "Sales", "2024-01-09", "2024-01-12", true),
        ];
        let conflicts = detect_conflicts(&records);
        let departments: Vec<&str> = conflicts.iter().map(|c| c.department.as_str()).collect();
        assert_eq!(departments, vec!["Sales", "IT"]);
        assert_eq!(index_pairs(&conflicts), vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn test_department_grouping_is_case_sensitive() {
        let records = vec![
            create_record("A", "Sales", "2024-01-01", "2024-01-10", true),
            create_record("B", "sales", "2024-01-01", "2024-01-10", true),
        ];
        assert!(detect_conflicts(&records).is_empty());
    }

    #[test]
    fn test_sweep_matches_pairwise_on_unsorted_input() {
        let records = vec![
            create_record("A", "IT", "2024-03-01", "2024-03-20", true),
            create_record("B", "IT", "2024-01-01", "2024-03-01", false),
            create_record("C", "Ops", "2024-02-10", "2024-02-12", true),
            create_record("D", "IT", "2024-02-15", "2024-02-16", true),
            create_record("E", "Ops", "2024-02-12", "2024-02-12", false),
            create_record("F", "IT", "2024-03-20", "2024-03-25", true),
            create_record("G", "IT", "2024-01-01", "2024-01-01", true),
        ];
        assert_eq!(detect_conflicts_sweep(&records), detect_conflicts(&records));
        assert_eq!(
            index_pairs(&detect_conflicts(&records)),
            vec![(0, 1), (0, 5), (1, 3), (1, 6), (2, 4)]
        );
    }

    #[test]
    fn test_sweep_handles_identical_start_dates() {
        let records = vec![
            create_record("A", "IT", "2024-01-01", "2024-01-01", true),
            create_record("B", "IT", "2024-01-01", "2024-01-01", true),
            create_record("C", "IT", "2024-01-01", "2024-01-02", true),
        ];
        assert_eq!(detect_conflicts_sweep(&records), detect_conflicts(&records));
        assert_eq!(detect_conflicts(&records).len(), 3);
    }

    #[test]
    fn test_repeated_detection_is_identical() {
        let records = marketing_records();
        assert_eq!(detect_conflicts(&records), detect_conflicts(&records));
    }

    #[test]
    fn test_summarize_by_employee() {
        let conflicts = detect_conflicts(&marketing_records());
        let summaries = summarize_by_employee(&conflicts);

        let names: Vec<&str> = summaries.iter().map(|s| s.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Diana"]);

        let alice = &summaries[0];
        let others: Vec<&str> = alice
            .conflicts_with
            .iter()
            .map(|e| e.employee_name.as_str())
            .collect();
        assert_eq!(others, vec!["Bob", "Diana"]);
        assert_eq!(alice.describe(), "Conflicts with: Bob, Diana");

        let diana = &summaries[2];
        assert_eq!(diana.conflicts_with.len(), 2);
        assert_eq!(diana.conflicts_with[0].employee_name, "Alice");
    }

    #[test]
    fn test_conflicting_departments_deduplicated() {
        let mut records = marketing_records();
        records.push(create_record("Eve", "Ventas", "2024-07-02", "2024-07-03", false));
        let conflicts = detect_conflicts(&records);
        assert_eq!(
            conflicting_departments(&conflicts),
            vec!["Marketing".to_string(), "Ventas".to_string()]
        );
    }
}
