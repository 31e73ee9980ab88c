//! Browser-facing request handlers
//!
//! The index page is the only read path. Every mutation forwards to the
//! task store and then redirects back to `/` regardless of the backend
//! outcome — failures are logged, not surfaced, matching the
//! post/redirect/get flow the forms rely on.

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::client::messages::{NewTask, TaskUpdate};
use crate::error::WebResult;
use crate::routes::AppState;
use crate::view;

/// Form fields shared by the add flow
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

/// Form fields for the update flow
///
/// `completed` follows the HTML checkbox convention: present ("on") when
/// ticked, absent otherwise — never a literal boolean.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskForm {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub completed: Option<String>,
}

/// Delete id carried in the form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTaskForm {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Delete id carried in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTaskParams {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Render the task list
///
/// GET /
///
/// A failing backend propagates as an error response; the page never
/// renders an empty list as if the fetch had succeeded.
pub async fn index(State(state): State<AppState>) -> WebResult<Html<String>> {
    let tasks = state.client.list_tasks().await?;

    Ok(Html(view::render_index(&tasks)))
}

/// Liveness probe, no backend interaction
///
/// GET /healthz
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Create a task from a form submission
///
/// POST /add (alias POST /create)
pub async fn add_task(State(state): State<AppState>, Form(form): Form<AddTaskForm>) -> Redirect {
    let task = NewTask {
        title: form.title,
        description: form.description,
        due_date: form.due_date,
        priority: form.priority,
    };

    if let Err(err) = state.client.create_task(&task).await {
        tracing::warn!(error = %err, "create task failed");
    }

    Redirect::to("/")
}

/// Update a task from a form submission
///
/// POST /update
pub async fn update_task(
    State(state): State<AppState>,
    Form(form): Form<UpdateTaskForm>,
) -> Redirect {
    let id = form.id;
    let update = TaskUpdate {
        title: form.title,
        description: form.description,
        due_date: form.due_date,
        priority: form.priority,
        completed: form.completed.is_some(),
    };

    if let Err(err) = state.client.update_task(id, &update).await {
        tracing::warn!(id, error = %err, "update task failed");
    }

    Redirect::to("/")
}

/// Delete a task
///
/// POST /delete
///
/// The id may arrive in the form body or the query string; the body wins
/// when both are present.
pub async fn delete_task(
    State(state): State<AppState>,
    Query(params): Query<DeleteTaskParams>,
    form: Option<Form<DeleteTaskForm>>,
) -> Redirect {
    let id = form.and_then(|Form(f)| f.id).or(params.id);

    match id {
        Some(id) => {
            if let Err(err) = state.client.delete_task(id).await {
                tracing::warn!(id, error = %err, "delete task failed");
            }
        }
        None => tracing::warn!("delete request without an id"),
    }

    Redirect::to("/")
}

/// Method guard: non-POST requests on mutation paths go back to the index
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}
