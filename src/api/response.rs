//! Response types for the vacation engine API.
//!
//! This module defines the analysis response body, the error response
//! structures and the mapping from [`EngineError`] to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::AnalysisReport;
use crate::error::EngineError;
use crate::models::{DepartmentPresence, Record};
use crate::validation::{RowError, RowWarning};

/// Response body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Identifier of this analysis, echoed in the logs.
    pub analysis_id: Uuid,
    /// Problems of rejected rows.
    pub errors: Vec<RowError>,
    /// Cosmetic problems of accepted rows.
    pub warnings: Vec<RowWarning>,
    /// Filtered records, conflicts and aggregates.
    #[serde(flatten)]
    pub report: AnalysisReport,
    /// Who is away at `as_of`, when a reference date was given.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub occupancy: Option<OccupancyView>,
}

/// Occupancy of the filtered records at a reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyView {
    /// The reference date.
    pub as_of: NaiveDate,
    /// Approved vacations covering `as_of`.
    pub on_leave: Vec<CurrentLeave>,
    /// Approved vacations starting after `as_of`, earliest first.
    pub upcoming: Vec<Record>,
    /// Per-department share of employees on leave.
    pub departments: Vec<DepartmentPresence>,
}

/// A vacation in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentLeave {
    /// The record.
    #[serde(flatten)]
    pub record: Record,
    /// Days until the vacation ends; zero on its last day.
    pub remaining_days: i64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid criteria error response.
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_CRITERIA",
            message,
            "The filter criteria cannot be applied",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_criteria(error.to_string()),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_date_range_maps_to_400() {
        let engine_error = EngineError::InvalidDateRange {
            from: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_CRITERIA");
        assert!(api_error.error.message.contains("2024-02-01"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            message: "no date formats".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(api_error.error.details.as_deref(), Some("no date formats"));
    }

    #[tokio::test]
    async fn test_error_response_renders_status_and_body() {
        let response = ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::invalid_criteria("bad range"),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CRITERIA");
        assert_eq!(error.message, "bad range");
    }
}
