pub mod online;

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, reports, tasks};
use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// ```text
/// POST   /categories          create
/// GET    /categories          list
/// GET    /categories/{id}     get_by_id
/// PUT    /categories/{id}     update
/// DELETE /categories/{id}     delete
///
/// POST   /tasks               create
/// GET    /tasks               list (filters: status, category_id,
///                             priority, created_after, created_before)
/// GET    /tasks/{id}          get_by_id
/// PUT    /tasks/{id}          update
/// DELETE /tasks/{id}          delete
///
/// GET    /reports             grouped counts + total
/// ```
pub fn api_routes() -> Router<AppState> {
    let category_routes = Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            get(categories::get_by_id)
                .put(categories::update)
                .delete(categories::delete),
        );

    let task_routes = Router::new()
        .route("/", get(tasks::list).post(tasks::create))
        .route(
            "/{id}",
            get(tasks::get_by_id)
                .put(tasks::update)
                .delete(tasks::delete),
        );

    Router::new()
        .nest("/categories", category_routes)
        .nest("/tasks", task_routes)
        .route("/reports", get(reports::report))
}
