//! Application state shared by all handlers.

use std::sync::Arc;

use crate::store::StoreHandle;

/// Root application state
///
/// Cheap to clone; every clone points at the same store handle.
#[derive(Clone, Debug)]
pub struct AppState {
    store: Arc<StoreHandle>,
}

impl AppState {
    pub fn new(store: StoreHandle) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Get the lazily opened venue store
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }
}
