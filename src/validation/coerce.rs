//! Cell coercion helpers.
//!
//! Each helper turns one loosely-typed [`CellValue`] into the typed value a
//! [`Record`](crate::models::Record) needs, or into the [`RowErrorKind`]
//! explaining why it could not.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::ValidationConfig;
use crate::models::CellValue;

use super::issues::RowErrorKind;

const BLANK: &str = "<blank>";

/// Parses a date cell.
///
/// Typed date cells pass through. Text is tried against each format in
/// order, first as a plain date and then as a datetime whose date part is
/// kept. Numeric and boolean cells are not dates.
///
/// # Example
///
/// ```
/// use vacation_engine::models::CellValue;
/// use vacation_engine::validation::parse_date;
/// use chrono::NaiveDate;
///
/// let formats = vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()];
/// let parsed = parse_date(&CellValue::from("05/01/2024"), &formats);
/// assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 5));
/// ```
pub fn parse_date(cell: &CellValue, formats: &[String]) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(date) => Some(*date),
        CellValue::Text(text) => {
            let text = text.trim();
            formats.iter().find_map(|format| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .or_else(|| {
                        NaiveDateTime::parse_from_str(text, format)
                            .ok()
                            .map(|dt| dt.date())
                    })
            })
        }
        _ => None,
    }
}

/// Parses a day-count cell.
///
/// Returns `Ok(None)` for a blank cell so the caller can derive the count
/// from the dates. Integers, integral floats and numeric text are accepted.
pub fn parse_day_count(cell: &CellValue) -> Result<Option<u32>, RowErrorKind> {
    let whole = match cell {
        CellValue::Null => return Ok(None),
        CellValue::Text(text) if text.trim().is_empty() => return Ok(None),
        CellValue::Integer(value) => Some(*value),
        CellValue::Float(value) => integral(*value),
        CellValue::Text(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        CellValue::Bool(_) | CellValue::Date(_) => None,
    };

    let value = whole.ok_or_else(|| RowErrorKind::InvalidDayCount {
        value: render(cell),
    })?;

    if value < 1 {
        return Err(RowErrorKind::DayCountOutOfRange { value });
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| RowErrorKind::DayCountOutOfRange { value })
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

/// Normalized approval token sets.
#[derive(Debug, Clone)]
pub struct ApprovalTokens {
    affirmative: HashSet<String>,
    negative: HashSet<String>,
}

impl ApprovalTokens {
    /// Builds the token sets from configuration, trimmed and lowercased.
    pub fn from_config(config: &ValidationConfig) -> Self {
        let normalize = |tokens: &[String]| -> HashSet<String> {
            tokens.iter().map(|t| t.trim().to_lowercase()).collect()
        };
        Self {
            affirmative: normalize(&config.affirmative_tokens),
            negative: normalize(&config.negative_tokens),
        }
    }

    /// Parses an approval cell.
    ///
    /// Boolean cells pass through; numbers and text are matched against the
    /// token sets case-insensitively.
    pub fn parse(&self, cell: &CellValue) -> Result<bool, RowErrorKind> {
        if let CellValue::Bool(value) = cell {
            return Ok(*value);
        }

        let token = cell.as_text().map(|t| t.to_lowercase());
        match token {
            Some(t) if self.affirmative.contains(&t) => Ok(true),
            Some(t) if self.negative.contains(&t) => Ok(false),
            _ => Err(RowErrorKind::UnrecognizedApproval {
                value: render(cell),
            }),
        }
    }
}

/// Renders a cell for error messages.
pub(crate) fn render(cell: &CellValue) -> String {
    cell.as_text().unwrap_or_else(|| BLANK.to_string())
}
