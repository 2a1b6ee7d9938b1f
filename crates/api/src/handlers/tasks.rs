//! Handlers for task CRUD and filtered listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Deserialize;

use taskdeck_core::error::CoreError;
use taskdeck_core::task::{validate_title, TaskPriority, TaskStatus};
use taskdeck_core::types::{DbId, Timestamp};
use taskdeck_db::models::task::{CreateTask, TaskFilters, UpdateTask};
use taskdeck_db::repositories::{CategoryRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::handlers::parse_id;
use crate::state::AppState;

/// Query parameters for `GET /tasks`. All optional; combined with AND.
///
/// `category_id` arrives as a raw string so its integer coercion can be
/// handled explicitly (see [`coerce_category_id`]).
#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub category_id: Option<String>,
    pub priority: Option<TaskPriority>,
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,
}

/// Coerce the `category_id` query value to an id predicate.
///
/// A non-numeric value must match no rows rather than being silently
/// dropped. Ids start at 1, so `-1` satisfies no equality predicate.
fn coerce_category_id(raw: Option<&str>) -> Option<DbId> {
    raw.map(|s| s.parse::<DbId>().unwrap_or(-1))
}

/// Verify that a category exists, returning an error if not found.
async fn ensure_category_exists(pool: &sqlx::PgPool, category_id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Category" }))?;
    Ok(())
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let task = TaskRepo::create(&state.pool, &input, Utc::now()).await?;

    tracing::info!(
        task_id = task.id,
        category_id = task.category_id,
        status = task.status.as_str(),
        "Task created"
    );

    Ok((StatusCode::CREATED, axum::Json(task)))
}

/// GET /tasks
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> AppResult<impl IntoResponse> {
    let filters = TaskFilters {
        status: query.status,
        category_id: coerce_category_id(query.category_id.as_deref()),
        priority: query.priority,
        created_after: query.created_after,
        created_before: query.created_before,
    };

    let tasks = TaskRepo::list(&state.pool, &filters).await?;
    Ok(axum::Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Task", &id)?;

    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task" }))?;

    Ok(axum::Json(task))
}

/// PUT /tasks/{id}
///
/// Applies only the provided fields. When the patch carries `category_id`,
/// the referenced category must exist; when it carries `status`, the
/// completion timestamp is re-derived against the stored status.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Task", &id)?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::Core)?;
    }

    let existing = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task" }))?;

    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let task = TaskRepo::update(&state.pool, id, &input, existing.status, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task" }))?;

    tracing::info!(task_id = id, status = task.status.as_str(), "Task updated");

    Ok(axum::Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Task", &id)?;

    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task" }));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
