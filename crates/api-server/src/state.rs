//! Application state

use std::sync::Arc;

use tm_core::task::MemoryTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub task_store: MemoryTaskStore,
}

impl AppState {
    /// Create a new AppState around the given store
    pub fn new(task_store: MemoryTaskStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_store }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &MemoryTaskStore {
        &self.inner.task_store
    }
}
