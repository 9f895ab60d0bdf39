//! Request types for the vacation engine API.
//!
//! Rows use the spreadsheet column names (`"ID"`, `"Nombre"`, ...) or their
//! snake_case aliases; see [`RawRow`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FilterCriteria, RawRow};

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// Spreadsheet rows in sheet order.
    pub rows: Vec<RawRow>,
}

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Spreadsheet rows in sheet order.
    pub rows: Vec<RawRow>,
    /// Filter applied to the valid records. Defaults to no restriction.
    #[serde(default)]
    pub criteria: FilterCriteria,
    /// Reference date for occupancy. Occupancy is omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}
