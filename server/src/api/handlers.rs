//! Task API handlers

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::domain::{Task, TaskUpdate, TITLE_REQUIRED};
use crate::repository::Repository;

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// `GET /api/tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.tasks.list().await?))
}

/// `POST /api/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let title = req.title.ok_or_else(|| ApiError::BadRequest(TITLE_REQUIRED.to_string()))?;
    let mut task = Task::new(title, req.description.unwrap_or_default())?;
    task.completed = req.completed.unwrap_or(false);

    let created = state.tasks.create(&task).await?;
    tracing::info!(id = created.id, "task created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::task_not_found())?;
    let mut task = state
        .tasks
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::task_not_found)?;

    let Json(update) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    update.apply(&mut task)?;

    let updated = state.tasks.update(&task).await?;
    tracing::info!(id, completed = updated.completed, "task updated");
    Ok(Json(updated))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::task_not_found())?;
    if !state.tasks.delete(id).await? {
        return Err(ApiError::task_not_found());
    }

    tracing::info!(id, "task deleted");
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
