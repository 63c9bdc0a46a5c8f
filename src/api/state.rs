//! Application state for the Vacation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::allocation::LeaveRequestRegistry;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration and the registry of submitted leave requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded vacation configuration.
    config: Arc<ConfigLoader>,
    /// Submitted leave requests.
    registry: Arc<LeaveRequestRegistry>,
}

impl AppState {
    /// Creates a new application state with an empty request registry.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_registry(config, Arc::new(LeaveRequestRegistry::new()))
    }

    /// Creates a new application state sharing an existing registry.
    pub fn with_registry(config: ConfigLoader, registry: Arc<LeaveRequestRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            registry,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the leave request registry.
    pub fn registry(&self) -> &LeaveRequestRegistry {
        &self.registry
    }
}
