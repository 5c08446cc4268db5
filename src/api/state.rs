//! Application state for the calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalculatorConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the read-only calculator configuration shared by every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<CalculatorConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self::from_config(loader.into_config())
    }

    /// Creates a new application state from an already built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::builtin())
    }
}
