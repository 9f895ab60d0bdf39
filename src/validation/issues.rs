//! Per-row problems found during validation.
//!
//! Row problems are collected, never raised: validation of a batch always
//! completes and hands back both the accepted records and these values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowErrorKind {
    /// A required text field is missing or blank.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The field name.
        field: String,
    },

    /// A date cell could not be parsed with any accepted format.
    #[error("unparseable date in '{field}': {value}")]
    InvalidDate {
        /// The field name.
        field: String,
        /// The offending cell rendered as text.
        value: String,
    },

    /// The start date falls after the end date.
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd {
        /// Parsed start date.
        start: NaiveDate,
        /// Parsed end date.
        end: NaiveDate,
    },

    /// A date parsed but lies outside the accepted year window.
    #[error("date in '{field}' outside years {min_year}..={max_year}: {date}")]
    DateOutOfRange {
        /// The field name.
        field: String,
        /// The parsed date.
        date: NaiveDate,
        /// Earliest accepted year.
        min_year: i32,
        /// Latest accepted year.
        max_year: i32,
    },

    /// The vacation is longer than the configured limit.
    #[error("vacation spans {span} days, limit is {max}")]
    SpanTooLong {
        /// Inclusive span of the dates.
        span: i64,
        /// Configured limit.
        max: u32,
    },

    /// The day count is not a whole number.
    #[error("non-numeric day count: {value}")]
    InvalidDayCount {
        /// The offending cell rendered as text.
        value: String,
    },

    /// The day count is a whole number below one.
    #[error("day count must be at least 1, got {value}")]
    DayCountOutOfRange {
        /// The parsed value.
        value: i64,
    },

    /// The approval cell matched neither token set.
    #[error("unrecognized approval value: {value}")]
    UnrecognizedApproval {
        /// The offending cell rendered as text.
        value: String,
    },
}

/// A rejected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// Zero-based position of the row in the input.
    pub row: usize,
    /// Employee id of the row, when one could be read.
    pub employee_id: Option<String>,
    /// What was wrong.
    pub kind: RowErrorKind,
    /// Human-readable rendering of `kind`.
    pub message: String,
}

impl RowError {
    pub(crate) fn new(row: usize, employee_id: Option<String>, kind: RowErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            row,
            employee_id,
            kind,
            message,
        }
    }
}

/// Why an accepted row deserves attention.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowWarningKind {
    /// The recorded day count differs from the inclusive span.
    #[error("day count {recorded} does not match the {span}-day span")]
    DayCountMismatch {
        /// Day count as recorded.
        recorded: u32,
        /// Inclusive span of the dates.
        span: i64,
    },

    /// The day count was empty and was taken from the span.
    #[error("day count missing, derived {span} from the dates")]
    DayCountDerived {
        /// Inclusive span of the dates.
        span: u32,
    },
}

/// An accepted row with a cosmetic problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    /// Zero-based position of the row in the input.
    pub row: usize,
    /// Employee id of the row.
    pub employee_id: String,
    /// What was noticed.
    pub kind: RowWarningKind,
    /// Human-readable rendering of `kind`.
    pub message: String,
}

impl RowWarning {
    pub(crate) fn new(row: usize, employee_id: String, kind: RowWarningKind) -> Self {
        let message = kind.to_string();
        Self {
            row,
            employee_id,
            kind,
            message,
        }
    }
}
