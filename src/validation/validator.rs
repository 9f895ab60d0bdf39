//! Batch validation of raw rows.
//!
//! This module turns a sequence of [`RawRow`]s into typed [`Record`]s. Bad
//! rows are reported individually and never abort the batch.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::models::{CellValue, RawRow, Record, inclusive_days};

use super::coerce::{ApprovalTokens, parse_date, parse_day_count, render};
use super::issues::{RowError, RowErrorKind, RowWarning, RowWarningKind};

/// The result of validating a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Accepted records, in input order.
    pub records: Vec<Record>,
    /// Problems of rejected rows, ordered by row then field.
    pub errors: Vec<RowError>,
    /// Cosmetic problems of accepted rows, in input order.
    pub warnings: Vec<RowWarning>,
}

impl ValidationOutcome {
    /// Number of distinct rows that were rejected.
    pub fn rejected_rows(&self) -> usize {
        let mut rows: Vec<usize> = self.errors.iter().map(|e| e.row).collect();
        rows.dedup();
        rows.len()
    }

    /// Returns true if every row was accepted.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates rows with the default [`ValidationConfig`].
///
/// # Example
///
/// ```
/// use vacation_engine::models::{CellValue, RawRow};
/// use vacation_engine::validation::validate;
///
/// let row = RawRow {
///     employee_id: CellValue::from("E1"),
///     employee_name: CellValue::from("Ana"),
///     department: CellValue::from("Sales"),
///     start_date: CellValue::from("2024-01-01"),
///     end_date: CellValue::from("2024-01-10"),
///     day_count: CellValue::Integer(10),
///     approved: CellValue::from("yes"),
/// };
///
/// let outcome = validate(&[row, RawRow::default()]);
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.rejected_rows(), 1);
/// ```
pub fn validate(rows: &[RawRow]) -> ValidationOutcome {
    validate_with(rows, &ValidationConfig::default())
}

/// Validates rows with explicit settings.
///
/// A row is rejected when its id, name or department is blank, when either
/// date fails to parse or falls outside the configured years, when the start
/// is after the end, when the span exceeds `max_span_days`, when the day count
/// is not a whole number of at least one, or when the approval cell matches
/// no token. Every problem of a rejected row is reported. Accepted rows
/// whose day count disagrees with their span by more than the tolerance
/// produce a warning; the dates win.
pub fn validate_with(rows: &[RawRow], config: &ValidationConfig) -> ValidationOutcome {
    let tokens = ApprovalTokens::from_config(config);
    let mut outcome = ValidationOutcome::default();

    for (row, raw) in rows.iter().enumerate() {
        match validate_row(row, raw, config, &tokens) {
            Ok((record, warning)) => {
                outcome.records.push(record);
                outcome.warnings.extend(warning);
            }
            Err(errors) => outcome.errors.extend(errors),
        }
    }

    outcome
}

type RowResult = Result<(Record, Option<RowWarning>), Vec<RowError>>;

fn validate_row(
    row: usize,
    raw: &RawRow,
    config: &ValidationConfig,
    tokens: &ApprovalTokens,
) -> RowResult {
    let mut problems: Vec<RowErrorKind> = Vec::new();

    let employee_id = required_text(&raw.employee_id, "employee_id", &mut problems);
    let employee_name = required_text(&raw.employee_name, "employee_name", &mut problems);
    let department = required_text(&raw.department, "department", &mut problems);
    let start_date = required_date(&raw.start_date, "start_date", config, &mut problems);
    let end_date = required_date(&raw.end_date, "end_date", config, &mut problems);

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            problems.push(RowErrorKind::StartAfterEnd { start, end });
        } else {
            let span = inclusive_days(start, end);
            if span > i64::from(config.max_span_days) {
                problems.push(RowErrorKind::SpanTooLong {
                    span,
                    max: config.max_span_days,
                });
            }
        }
    }

    let day_count = parse_day_count(&raw.day_count)
        .map_err(|kind| problems.push(kind))
        .ok();
    let approved = tokens
        .parse(&raw.approved)
        .map_err(|kind| problems.push(kind))
        .ok();

    match (
        employee_id.clone(),
        employee_name,
        department,
        start_date,
        end_date,
        day_count,
        approved,
    ) {
        (
            Some(employee_id),
            Some(employee_name),
            Some(department),
            Some(start_date),
            Some(end_date),
            Some(day_count),
            Some(approved),
        ) if problems.is_empty() => {
            let span = inclusive_days(start_date, end_date);
            let (day_count, warning) = match day_count {
                Some(recorded) => {
                    let warning = ((i64::from(recorded) - span).unsigned_abs()
                        > u64::from(config.day_count_tolerance))
                    .then(|| {
                        RowWarning::new(
                            row,
                            employee_id.clone(),
                            RowWarningKind::DayCountMismatch { recorded, span },
                        )
                    });
                    (recorded, warning)
                }
                None => {
                    let derived = u32::try_from(span).unwrap_or(u32::MAX);
                    let warning = RowWarning::new(
                        row,
                        employee_id.clone(),
                        RowWarningKind::DayCountDerived { span: derived },
                    );
                    (derived, Some(warning))
                }
            };

            let record = Record {
                employee_id,
                employee_name,
                department,
                start_date,
                end_date,
                day_count,
                approved,
            };
            Ok((record, warning))
        }
        _ => Err(problems
            .into_iter()
            .map(|kind| RowError::new(row, employee_id.clone(), kind))
            .collect()),
    }
}

fn required_text(
    cell: &CellValue,
    field: &str,
    problems: &mut Vec<RowErrorKind>,
) -> Option<String> {
    let text = cell.as_text();
    if text.is_none() {
        problems.push(RowErrorKind::MissingField {
            field: field.to_string(),
        });
    }
    text
}

fn required_date(
    cell: &CellValue,
    field: &str,
    config: &ValidationConfig,
    problems: &mut Vec<RowErrorKind>,
) -> Option<chrono::NaiveDate> {
    if cell.is_blank() {
        problems.push(RowErrorKind::MissingField {
            field: field.to_string(),
        });
        return None;
    }

    let Some(date) = parse_date(cell, &config.date_formats) else {
        problems.push(RowErrorKind::InvalidDate {
            field: field.to_string(),
            value: render(cell),
        });
        return None;
    };

    if !(config.min_year..=config.max_year).contains(&date.year()) {
        problems.push(RowErrorKind::DateOutOfRange {
            field: field.to_string(),
            date,
            min_year: config.min_year,
            max_year: config.max_year,
        });
        return None;
    }
    Some(date)
}
