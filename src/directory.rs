//! Process-local naming directory for resolving service names to trading manager handles
//!
//! The remote client of the original service resolves a configured name to a manager handle
//! through a naming directory before issuing any calls. This module is the in-process
//! counterpart: names are bound to shared [`TradingManager`] handles and looked up by
//! clients, with a typed error when a name is not bound.

use crate::manager::TradingManager;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Errors that can occur during directory resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// No manager is bound under the given name
    NameNotBound(String),
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingError::NameNotBound(name) => write!(f, "Name not bound: {}", name),
        }
    }
}

impl std::error::Error for NamingError {}

/// A registry of named trading manager handles, stored in a concurrent map so bindings and
/// lookups from multiple threads never block each other
pub struct Directory {
    bindings: DashMap<String, Arc<TradingManager>>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }

    /// Bind a manager under a name, replacing any previous binding for that name
    pub fn bind(&self, name: &str, manager: Arc<TradingManager>) {
        trace!("Binding trading manager under name {}", name);
        self.bindings.insert(name.to_string(), manager);
    }

    /// Resolve a name to its bound manager handle
    pub fn lookup(&self, name: &str) -> Result<Arc<TradingManager>, NamingError> {
        trace!("Looking up name {}", name);
        self.bindings
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| NamingError::NameNotBound(name.to_string()))
    }

    /// Remove a binding, returning the handle if the name was bound
    pub fn unbind(&self, name: &str) -> Option<Arc<TradingManager>> {
        trace!("Unbinding name {}", name);
        self.bindings.remove(name).map(|(_, manager)| manager)
    }

    /// Check whether a name is currently bound
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
