//! Application state for the vacation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::analysis::AnalysisCache;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded engine configuration and the analysis memo sized from
/// it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    cache: Arc<AnalysisCache>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let cache = AnalysisCache::new(config.analysis().cache_capacity);
        Self {
            config: Arc::new(config),
            cache: Arc::new(cache),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared analysis cache.
    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_cache_sized_from_config() {
        let state = AppState::new(ConfigLoader::default());
        assert_eq!(
            state.cache().capacity(),
            state.config().analysis().cache_capacity
        );
        assert!(state.cache().is_empty());
    }
}
