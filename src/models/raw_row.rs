//! Loosely-typed input rows.
//!
//! Ingestion adapters (spreadsheet readers, JSON uploads) hand the engine a
//! sequence of [`RawRow`]s. Each field is a [`CellValue`] so that text dates,
//! numeric cells and spreadsheet booleans can all pass through untouched
//! until validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single loosely-typed cell.
///
/// Deserialization is untagged: `null`, booleans, integers, floats and
/// strings map onto the matching variant. [`CellValue::Date`] is produced by
/// adapters whose source already carries typed dates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or empty cell.
    #[default]
    Null,
    /// Boolean cell.
    Bool(bool),
    /// Integral numeric cell.
    Integer(i64),
    /// Non-integral numeric cell.
    Float(f64),
    /// Free text.
    Text(String),
    /// A cell that is already a calendar date.
    Date(NaiveDate),
}

impl CellValue {
    /// Returns true for null cells and text that is blank after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Renders the cell as trimmed text, or `None` when blank.
    ///
    /// Integral numbers render without a fractional part so that numeric
    /// employee ids survive spreadsheet round-trips.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(value) => Some(value.to_string()),
            CellValue::Integer(value) => Some(value.to_string()),
            CellValue::Float(value) if value.fract() == 0.0 && fits_i64(*value) => {
                Some(format!("{}", *value as i64))
            }
            CellValue::Float(value) => Some(value.to_string()),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }
}

// 2^63 is exactly representable; anything at or above it would saturate.
fn fits_i64(value: f64) -> bool {
    value >= i64::MIN as f64 && value < i64::MAX as f64
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// One raw input row with the seven expected fields.
///
/// Field names follow the spreadsheet column headers; snake_case aliases are
/// accepted as well. Absent fields deserialize as [`CellValue::Null`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRow {
    /// Employee identifier column (`ID`).
    #[serde(rename = "ID", alias = "employee_id", default)]
    pub employee_id: CellValue,
    /// Employee name column (`Nombre`).
    #[serde(rename = "Nombre", alias = "employee_name", default)]
    pub employee_name: CellValue,
    /// Department column (`Departamento`).
    #[serde(rename = "Departamento", alias = "department", default)]
    pub department: CellValue,
    /// Vacation start column (`Fecha inicio vacaciones`).
    #[serde(rename = "Fecha inicio vacaciones", alias = "start_date", default)]
    pub start_date: CellValue,
    /// Vacation end column (`Fecha fin vacaciones`).
    #[serde(rename = "Fecha fin vacaciones", alias = "end_date", default)]
    pub end_date: CellValue,
    /// Day count column (`Días`).
    #[serde(rename = "Días", alias = "day_count", default)]
    pub day_count: CellValue,
    /// Approval column (`Aprobado`).
    #[serde(rename = "Aprobado", alias = "approved", default)]
    pub approved: CellValue,
}
