//! Handler for the aggregate task report.

use axum::extract::State;
use axum::response::IntoResponse;

use taskdeck_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /reports
///
/// Grouped counts by status, category, and priority over the full task set,
/// plus a grand total.
pub async fn report(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let report = ReportRepo::build(&state.pool).await?;
    Ok(axum::Json(report))
}
