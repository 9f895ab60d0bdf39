//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{AnalysisConfig, EngineConfig, ValidationConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Structure
///
/// ```text
/// validation:
///   date_formats: ["%Y-%m-%d", "%d/%m/%Y"]
///   affirmative_tokens: ["yes", "sí"]
///   negative_tokens: ["no"]
///   day_count_tolerance: 0
/// analysis:
///   upcoming_limit: 10
///   cache_capacity: 64
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Tolerance: {}", loader.validation().day_count_tolerance);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The settings are inconsistent (see [`ConfigLoader::from_config`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded engine configuration");
        Self::from_config(config)
    }

    /// Parses YAML text into an [`EngineConfig`].
    fn parse(content: &str, path: &str) -> EngineResult<EngineConfig> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Wraps an already-built configuration after checking it.
    ///
    /// Rejects configurations with no date formats, with an empty token
    /// set, with a token that is both affirmative and negative, or with an
    /// empty year window or span limit.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let validation = &config.validation;

        if validation.date_formats.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "no date formats configured".to_string(),
            });
        }

        if validation.affirmative_tokens.is_empty() || validation.negative_tokens.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "approval token sets must not be empty".to_string(),
            });
        }

        if validation.min_year > validation.max_year {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "min_year {} is after max_year {}",
                    validation.min_year, validation.max_year
                ),
            });
        }

        if validation.max_span_days == 0 {
            return Err(EngineError::InvalidConfig {
                message: "max_span_days must be at least 1".to_string(),
            });
        }

        let affirmative: HashSet<String> = validation
            .affirmative_tokens
            .iter()
            .map(|t| t.trim().to_lowercase())
            .collect();
        if let Some(token) = validation
            .negative_tokens
            .iter()
            .map(|t| t.trim().to_lowercase())
            .find(|t| affirmative.contains(t))
        {
            return Err(EngineError::InvalidConfig {
                message: format!("approval token '{}' is both affirmative and negative", token),
            });
        }

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the validation settings.
    pub fn validation(&self) -> &ValidationConfig {
        &self.config.validation
    }

    /// Returns the analysis settings.
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.config.analysis
    }
}
