//! Operations dashboard endpoints: tasks and staff

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use concierge_core::{Error, StaffMember, Task, TaskUpdate};

use crate::state::AppState;
use crate::ServerError;

/// `GET /api/v1/tasks/`, newest first
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ServerError> {
    state
        .store
        .list()
        .await
        .map(Json)
        .map_err(|e| ServerError::Internal(format!("Failed to retrieve tasks: {}", e)))
}

/// `GET /api/v1/tasks/:id`
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ServerError> {
    let task = state
        .store
        .get(&task_id)
        .await
        .map_err(|e| ServerError::during("task retrieval", e))?
        .ok_or_else(|| Error::NotFound(format!("Task with ID '{}' not found.", task_id)))?;

    Ok(Json(task))
}

/// `PUT /api/v1/tasks/:id`
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Task>, ServerError> {
    let Json(update) = payload?;
    tracing::info!(
        task_id = %task_id,
        status = ?update.status,
        assigned_to_id = ?update.assigned_to_id,
        "Updating task"
    );

    let task = state
        .store
        .update(&task_id, update)
        .await
        .map_err(|e| ServerError::during("task update", e))?
        .ok_or_else(|| {
            Error::NotFound(format!(
                "Task with ID '{}' not found or update failed.",
                task_id
            ))
        })?;

    Ok(Json(task))
}

/// `GET /api/v1/staff/`
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffMember>>, ServerError> {
    state
        .store
        .list_staff()
        .await
        .map(Json)
        .map_err(|e| ServerError::Internal(format!("Failed to retrieve staff members: {}", e)))
}
