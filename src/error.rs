//! Error types for the vacation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the caller-fatal conditions of the engine. Row-level problems found
//! during validation are not errors in this sense; they are collected as
//! [`RowError`](crate::validation::RowError) values instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the vacation engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but is internally inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// Filter criteria carried a date range whose start is after its end.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// The requested start of the range.
        from: NaiveDate,
        /// The requested end of the range.
        to: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
