//! Handlers for category CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use taskdeck_core::category::{validate_color, validate_name};
use taskdeck_core::error::CoreError;
use taskdeck_db::models::category::{CreateCategory, UpdateCategory};
use taskdeck_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::handlers::parse_id;
use crate::state::AppState;

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name).map_err(AppError::Core)?;
    validate_color(&input.color).map_err(AppError::Core)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, axum::Json(category)))
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(axum::Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Category", &id)?;

    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Category" }))?;

    Ok(axum::Json(category))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Category", &id)?;

    if let Some(ref name) = input.name {
        validate_name(name).map_err(AppError::Core)?;
    }
    if let Some(ref color) = input.color {
        validate_color(color).map_err(AppError::Core)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Category" }))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(axum::Json(category))
}

/// DELETE /categories/{id}
///
/// Fails with 409 while tasks still reference the category.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("Category", &id)?;

    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Category" }));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
