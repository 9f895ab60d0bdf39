//! Validation and normalization of raw input rows.
//!
//! This module turns loosely-typed rows into validated records, reporting
//! per-row errors and warnings without aborting the batch. It performs no
//! logging; that belongs to the surrounding application.

mod coerce;
mod issues;
mod validator;

pub use coerce::{ApprovalTokens, parse_date, parse_day_count};
pub use issues::{RowError, RowErrorKind, RowWarning, RowWarningKind};
pub use validator::{ValidationOutcome, validate, validate_with};
