//! Application state for the Annual Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RuleCatalog;

/// Shared application state.
///
/// Holds the read-only rule catalog the handlers calculate against.
#[derive(Clone)]
pub struct AppState {
    /// The rule catalog.
    catalog: Arc<RuleCatalog>,
}

impl AppState {
    /// Creates a new application state serving the given catalog.
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Creates an application state serving the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(RuleCatalog::builtin().clone())
    }

    /// Returns a reference to the rule catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}
