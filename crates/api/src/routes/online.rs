use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response for the root route.
#[derive(Serialize)]
pub struct OnlineResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / -- plain liveness probe.
async fn online() -> Json<OnlineResponse> {
    Json(OnlineResponse {
        message: "API Online",
    })
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = taskdeck_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the root and health routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(online))
        .route("/health", get(health_check))
}
