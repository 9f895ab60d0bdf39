//! Configuration loading and management for the vacation engine.
//!
//! This module provides functionality to load engine settings from a YAML
//! file: accepted date formats, approval tokens, the day-count tolerance and
//! analysis limits.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Upcoming limit: {}", config.analysis().upcoming_limit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, EngineConfig, ValidationConfig};
