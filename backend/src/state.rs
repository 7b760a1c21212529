//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The calculation
//! engine is stateless, so the state only carries configuration.

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether degenerate profiles are rejected before calculating
    #[inline]
    pub fn strict_profiles(&self) -> bool {
        self.config.calculations.strict_profile_validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }

    #[test]
    fn test_strict_profiles_follows_config() {
        let mut config = AppConfig::default();
        config.calculations.strict_profile_validation = true;
        assert!(AppState::new(config).strict_profiles());
        assert!(!AppState::new(AppConfig::default()).strict_profiles());
    }
}
