//! Configuration types for the vacation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so a partial file only overrides what it names.

use serde::Deserialize;

/// Settings for turning raw rows into records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// `chrono` formats tried in order for text date cells. Formats with a
    /// time component are accepted and their date part is kept.
    pub date_formats: Vec<String>,
    /// Case-insensitive tokens meaning "approved".
    pub affirmative_tokens: Vec<String>,
    /// Case-insensitive tokens meaning "not approved".
    pub negative_tokens: Vec<String>,
    /// Allowed difference, in days, between the recorded day count and the
    /// inclusive span before a warning is raised.
    pub day_count_tolerance: u32,
    /// Earliest calendar year accepted in a date cell.
    pub min_year: i32,
    /// Latest calendar year accepted in a date cell.
    pub max_year: i32,
    /// Longest accepted vacation, in inclusive days.
    pub max_span_days: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            date_formats: to_strings(&[
                "%Y-%m-%d",
                "%d/%m/%Y",
                "%Y/%m/%d",
                "%d-%m-%Y",
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%d %H:%M:%S",
            ]),
            affirmative_tokens: to_strings(&["yes", "y", "true", "1", "sí", "si", "s"]),
            negative_tokens: to_strings(&["no", "n", "false", "0"]),
            day_count_tolerance: 0,
            min_year: 1900,
            max_year: 2200,
            max_span_days: 366,
        }
    }
}

/// Settings for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of upcoming vacations reported.
    pub upcoming_limit: usize,
    /// Maximum number of memoized analysis reports. Zero disables the memo.
    pub cache_capacity: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: 10,
            cache_capacity: 64,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Row validation settings.
    pub validation: ValidationConfig,
    /// Analysis settings.
    pub analysis: AnalysisConfig,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
