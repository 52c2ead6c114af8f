//! Task service trait
//!
//! Defines the interface for task CRUD operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskDraft};
use crate::Result;

/// Service interface for task CRUD operations
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Get all tasks in insertion order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Store a new task, assigning it a fresh identifier
    async fn create(&self, draft: TaskDraft) -> Result<Task>;

    /// Replace the description and completion flag of an existing task
    ///
    /// Returns `Error::TaskNotFound` if no task has the given identifier;
    /// the store is left unchanged in that case.
    async fn update(&self, id: Uuid, draft: TaskDraft) -> Result<Task>;

    /// Remove a task by identifier
    ///
    /// Deleting an identifier that is not in the store is a no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
