//! Task model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of trackable work
///
/// Serializes to the wire form `{id, description, isCompleted}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub is_completed: bool,
}

impl Task {
    /// Create a new task with the given description
    ///
    /// A fresh identifier is assigned here; it never changes afterwards.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            is_completed: false,
        }
    }

    /// Set the completion flag
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Fields accepted when creating or replacing a task
///
/// Carries no identifier, so a client can never supply one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl TaskDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            is_completed: false,
        }
    }
}

/// View filter over a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TaskFilter {
    /// Whether a task is visible under this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task");
        assert_eq!(task.description, "Test task");
        assert!(!task.is_completed);
        assert!(!task.id.is_nil());
    }

    #[test]
    fn test_task_with_completed() {
        let task = Task::new("Test task").with_completed(true);
        assert!(task.is_completed);
    }

    #[test]
    fn test_wire_field_names() {
        let task = Task::new("Test task");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("description").is_some());
        assert!(json.get("isCompleted").is_some());
    }

    #[test]
    fn test_task_round_trip() {
        let tasks = vec![
            Task::new("First"),
            Task::new("Second").with_completed(true),
            Task::new("Third"),
        ];
        let json = serde_json::to_string(&tasks).unwrap();
        let restored: Vec<Task> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tasks);
    }

    #[test]
    fn test_draft_defaults_to_not_completed() {
        let draft: TaskDraft = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        assert!(!draft.is_completed);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let tasks = vec![Task::new("a"), Task::new("b").with_completed(true)];
        let visible: Vec<&Task> = tasks.iter().filter(|t| TaskFilter::All.matches(t)).collect();
        assert_eq!(visible.len(), tasks.len());
        assert_eq!(visible[0].description, "a");
        assert_eq!(visible[1].description, "b");
    }

    #[test]
    fn test_filter_partitions_tasks() {
        let tasks = vec![
            Task::new("a"),
            Task::new("b").with_completed(true),
            Task::new("c"),
            Task::new("d").with_completed(true),
        ];

        let active: Vec<&Task> = tasks
            .iter()
            .filter(|t| TaskFilter::Active.matches(t))
            .collect();
        let completed: Vec<&Task> = tasks
            .iter()
            .filter(|t| TaskFilter::Completed.matches(t))
            .collect();

        assert_eq!(active.len(), 2);
        assert_eq!(completed.len(), 2);
        assert_eq!(active.len() + completed.len(), tasks.len());
        for task in &tasks {
            let in_active = active.iter().any(|t| t.id == task.id);
            let in_completed = completed.iter().any(|t| t.id == task.id);
            assert!(in_active != in_completed);
        }
    }
}
