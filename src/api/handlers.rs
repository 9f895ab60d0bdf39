//! HTTP request handlers for the vacation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{department_presence, on_leave_at, remaining_days, upcoming_leave};
use crate::models::Record;
use crate::validation::validate_with;

use super::request::{AnalyzeRequest, ValidateRequest};
use super::response::{AnalyzeResponse, ApiError, ApiErrorResponse, CurrentLeave, OccupancyView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for POST /validate.
///
/// Returns accepted records, row errors and row warnings. Bad rows never
/// fail the request.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let outcome = validate_with(&request.rows, state.config().validation());
    info!(
        correlation_id = %correlation_id,
        rows = request.rows.len(),
        accepted = outcome.records.len(),
        rejected = outcome.rejected_rows(),
        warnings = outcome.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Validation completed"
    );

    json_response(StatusCode::OK, outcome)
}

/// Handler for POST /analyze.
///
/// Validates the rows, then filters, detects conflicts and aggregates the
/// valid records. Occupancy is added when `as_of` is given.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let outcome = validate_with(&request.rows, state.config().validation());

    let report = match state
        .cache()
        .get_or_compute(&outcome.records, &request.criteria)
    {
        Ok(report) => report,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let occupancy = request.as_of.map(|as_of| {
        occupancy_view(
            &report.filtered,
            as_of,
            state.config().analysis().upcoming_limit,
        )
    });

    info!(
        correlation_id = %correlation_id,
        rows = request.rows.len(),
        accepted = outcome.records.len(),
        filtered = report.filtered.len(),
        conflicts = report.conflicts.len(),
        hard_conflicts = report.hard_conflict_count(),
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed"
    );

    let response = AnalyzeResponse {
        analysis_id: correlation_id,
        errors: outcome.errors,
        warnings: outcome.warnings,
        report: (*report).clone(),
        occupancy,
    };
    json_response(StatusCode::OK, response)
}

fn occupancy_view(records: &[Record], as_of: NaiveDate, upcoming_limit: usize) -> OccupancyView {
    let current = on_leave_at(records, as_of);
    let departments = department_presence(records, &current);
    let on_leave = current
        .into_iter()
        .map(|record| {
            let remaining_days = remaining_days(&record, as_of);
            CurrentLeave {
                record,
                remaining_days,
            }
        })
        .collect();

    OccupancyView {
        as_of,
        on_leave,
        upcoming: upcoming_leave(records, as_of, upcoming_limit),
        departments,
    }
}

/// Unwraps a JSON body or builds the 400 response for its rejection.
fn accept_json<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
