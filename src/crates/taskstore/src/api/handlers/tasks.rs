//! Task CRUD endpoint handlers
//!
//! Each handler maps one HTTP verb to one SQL statement through the
//! repository. Update and delete of unknown ids report success: the
//! affected-row count is observed for logging but never turned into an
//! error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::ApiResult;
use crate::api::models::{CreateTaskRequest, UpdateTaskRequest};
use crate::api::routes::AppState;
use crate::db::models::Task;
use crate::db::repositories::TaskRepository;

/// List all tasks
///
/// GET /tasks
///
/// Returns the full table in storage order; an empty table yields `[]`,
/// never null.
pub async fn list_tasks(State(app_state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = TaskRepository::list(app_state.db.pool()).await?;

    Ok(Json(tasks))
}

/// Create a new task
///
/// POST /tasks
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<StatusCode> {
    let id = TaskRepository::create(app_state.db.pool(), &req.into_draft()).await?;

    tracing::info!(id, "created task");
    Ok(StatusCode::CREATED)
}

/// Update an existing task
///
/// PUT /tasks/:id
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<StatusCode> {
    let (draft, completed) = req.into_parts();
    let affected = TaskRepository::update(app_state.db.pool(), id, &draft, completed).await?;

    tracing::debug!(id, affected, "updated task");
    Ok(StatusCode::OK)
}

/// Delete a task
///
/// DELETE /tasks/:id
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let affected = TaskRepository::delete(app_state.db.pool(), id).await?;

    tracing::debug!(id, affected, "deleted task");
    Ok(StatusCode::OK)
}
