//! Application state for the Attendance Reconciliation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains the storage backend and the loaded configuration. The
/// configuration is read once at startup; every handler resolves its
/// threshold from this one snapshot, so the punch path and the dashboard
/// path can never run with different defaults within one process.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            config: Arc::new(config),
        }
    }

    /// Returns the storage backend.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
