//! Client-side task controller
//!
//! Orchestrates loading and mutating the task list, keeping in-memory
//! state, the persisted snapshot and the backend consistent. Mutations are
//! proposed to the backend first and committed locally only on success.

use tracing::warn;
use uuid::Uuid;

use tm_core::task::{Task, TaskDraft, TaskFilter};

use crate::api::TaskApi;
use crate::cache::SnapshotCache;
use crate::error::Result;

/// Controller over a locally mirrored task list
pub struct TaskController<A: TaskApi> {
    api: A,
    cache: SnapshotCache,
    tasks: Vec<Task>,
}

impl<A: TaskApi> TaskController<A> {
    pub fn new(api: A, cache: SnapshotCache) -> Self {
        Self {
            api,
            cache,
            tasks: Vec::new(),
        }
    }

    /// Load initial state
    ///
    /// A stored snapshot wins over the network; the backend is consulted
    /// only when no usable snapshot exists.
    pub async fn load(&mut self) -> Result<()> {
        match self.cache.load() {
            Ok(Some(tasks)) => {
                self.tasks = tasks;
                Ok(())
            }
            Ok(None) => self.refresh().await,
            Err(e) => {
                warn!("Discarding unreadable snapshot: {}", e);
                self.refresh().await
            }
        }
    }

    /// Fetch the authoritative list from the backend and adopt it
    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.fetch_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.persist();
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching tasks from backend: {}", e);
                Err(e)
            }
        }
    }

    /// Add a task with the given description
    ///
    /// Whitespace-only input is skipped. On success the server-assigned
    /// record is appended; the local list never holds a guessed identifier.
    pub async fn add_task(&mut self, description: &str) -> Result<Option<Task>> {
        let description = description.trim();
        if description.is_empty() {
            return Ok(None);
        }

        match self.api.create_task(TaskDraft::new(description)).await {
            Ok(created) => {
                self.tasks.push(created.clone());
                self.persist();
                Ok(Some(created))
            }
            Err(e) => {
                warn!("Error adding task: {}", e);
                Err(e)
            }
        }
    }

    /// Flip the completion flag of the task with the given identifier
    ///
    /// The flipped record is sent as a full replace and committed locally
    /// only once the backend acknowledges. An identifier not present in
    /// local state is a no-op.
    pub async fn toggle_task(&mut self, id: Uuid) -> Result<()> {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return Ok(());
        };

        let mut proposed = task.clone();
        proposed.is_completed = !proposed.is_completed;

        match self.api.replace_task(id, &proposed).await {
            Ok(confirmed) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = confirmed;
                }
                self.persist();
                Ok(())
            }
            Err(e) => {
                warn!("Error toggling task {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Delete the task with the given identifier
    pub async fn delete_task(&mut self, id: Uuid) -> Result<()> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                self.persist();
                Ok(())
            }
            Err(e) => {
                warn!("Error deleting task {}: {}", id, e);
                Err(e)
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.cache.save(&self.tasks) {
            warn!("Error persisting snapshot: {}", e);
        }
    }

    /// All tasks in current state
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks visible under the given filter, in original order
    pub fn filtered_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    /// Total number of tasks
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }
}
