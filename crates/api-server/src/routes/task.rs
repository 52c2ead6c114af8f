//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use tm_core::task::{Task, TaskDraft, TaskService};
use tm_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List all tasks
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = state.task_store().list().await.map_err(internal_error)?;
    Ok(Json(tasks))
}

/// POST /api/tasks - Create a new task
///
/// The stored task gets a server-assigned identifier; anything the client
/// sends beyond the draft fields is ignored.
async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<ErrorResponse>)> {
    let created = state
        .task_store()
        .create(draft)
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/tasks/{id} - Replace a task's description and completion flag
async fn replace_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    match state.task_store().update(id, draft).await {
        Ok(updated) => Ok(Json(updated)),
        Err(Error::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task {} not found", id),
            }),
        )),
        Err(e) => Err(internal_error(e)),
    }
}

/// DELETE /api/tasks/{id} - Delete a task
///
/// Responds 204 whether or not the identifier existed.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .task_store()
        .delete(id)
        .await
        .map_err(internal_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            axum::routing::put(replace_task).delete(delete_task),
        )
}
