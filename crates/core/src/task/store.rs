//! In-memory task storage implementation
//!
//! Holds the authoritative task list for the lifetime of the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Task, TaskDraft};
use super::service::TaskService;
use crate::{Error, Result};

/// In-memory task store
///
/// Tasks are kept in a `Vec` so `list` returns them in insertion order.
/// The lock serializes mutations across concurrent requests.
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with starter tasks
    pub fn seeded() -> Self {
        let tasks = vec![
            Task::new("Learn Rust"),
            Task::new("Build the task API").with_completed(true),
            Task::new("Wire up the frontend"),
        ];
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskService for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.clone())
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let task = Task::new(draft.description).with_completed(draft.is_completed);
        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: Uuid, draft: TaskDraft) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        task.description = draft.description;
        task.is_completed = draft.is_completed;
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        tasks.retain(|t| t.id != id);
        Ok(())
    }
}
