//! Application state for the Duty Bonus Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::BonusEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded scheme configuration and an engine built from it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheme configuration.
    config: Arc<ConfigLoader>,
    /// Engine sharing the configuration's rules and calendar.
    engine: BonusEngine,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let engine = config.engine();
        Self {
            config: Arc::new(config),
            engine,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the bonus engine.
    pub fn engine(&self) -> &BonusEngine {
        &self.engine
    }
}
