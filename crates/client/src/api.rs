//! HTTP client for the task API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use uuid::Uuid;

use tm_core::task::{Task, TaskDraft};

use crate::error::{ClientError, Result};

/// The four task operations the backend exposes
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task list
    async fn fetch_tasks(&self) -> Result<Vec<Task>>;

    /// Create a task and return the server-assigned record
    async fn create_task(&self, draft: TaskDraft) -> Result<Task>;

    /// Replace a task's fields, returning the updated record
    async fn replace_task(&self, id: Uuid, task: &Task) -> Result<Task>;

    /// Delete a task; succeeds whether or not the identifier exists
    async fn delete_task(&self, id: Uuid) -> Result<()>;
}

/// Task API client over reqwest
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            // Disable proxy for local backend communication
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let res = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json().await?)
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task> {
        let res = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json().await?)
    }

    async fn replace_task(&self, id: Uuid, task: &Task) -> Result<Task> {
        let res = self.client.put(self.item_url(id)).json(task).send().await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::TaskNotFound {
                task_id: id.to_string(),
            });
        }

        let res = res.error_for_status()?;
        Ok(res.json().await?)
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_fetch_tasks() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tasks");
                then.status(200).json_body(json!([
                    {"id": id, "description": "Write spec", "isCompleted": false}
                ]));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let tasks = client.fetch_tasks().await.unwrap();

        mock.assert_async().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].description, "Write spec");
        assert!(!tasks[0].is_completed);
    }

    #[tokio::test]
    async fn test_create_task() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/tasks")
                    .json_body(json!({"description": "Write spec", "isCompleted": false}));
                then.status(201).json_body(json!(
                    {"id": id, "description": "Write spec", "isCompleted": false}
                ));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let created = client.create_task(TaskDraft::new("Write spec")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, id);
    }

    #[tokio::test]
    async fn test_replace_task() {
        let server = MockServer::start_async().await;
        let task = Task::new("Write spec").with_completed(true);
        let expected = task.clone();
        let mock = server
            .mock_async(move |when, then| {
                when.method(PUT)
                    .path(format!("/api/tasks/{}", task.id))
                    .json_body(json!({
                        "id": task.id,
                        "description": "Write spec",
                        "isCompleted": true
                    }));
                then.status(200).json_body(json!({
                    "id": task.id,
                    "description": "Write spec",
                    "isCompleted": true
                }));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let updated = client.replace_task(expected.id, &expected).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updated, expected);
    }

    #[tokio::test]
    async fn test_replace_missing_task() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        server
            .mock_async(move |when, then| {
                when.method(PUT).path(format!("/api/tasks/{}", id));
                then.status(404)
                    .json_body(json!({"error": format!("Task {} not found", id)}));
            })
            .await;

        let client = ApiClient::new(server.base_url());
        let task = Task::new("Gone");
        let result = client.replace_task(id, &task).await;

        match result {
            Err(ClientError::TaskNotFound { task_id }) => {
                assert_eq!(task_id, id.to_string());
            }
            other => panic!("Expected TaskNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_task() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(move |when, then| {
                when.method(DELETE).path(format!("/api/tasks/{}", id));
                then.status(204);
            })
            .await;

        let client = ApiClient::new(server.base_url());
        client.delete_task(id).await.unwrap();

        mock.assert_async().await;
    }
}
