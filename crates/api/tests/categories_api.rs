//! HTTP-level integration tests for category endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categories",
        serde_json::json!({"name": "Work", "color": "#FF5733"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Work");
    assert_eq!(json["color"], "#FF5733");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_without_hash_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categories",
        serde_json::json!({"name": "Work", "color": "FF5733"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_invalid_hex_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categories",
        serde_json::json!({"name": "Work", "color": "#GGGGGG"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categories",
        serde_json::json!({"name": "", "color": "#FF5733"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_missing_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categories", serde_json::json!({"name": "Work"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_categories(pool: PgPool) {
    common::seed_category(&pool, "Work", "#111111").await;
    common::seed_category(&pool, "Home", "#222222").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Work");
    assert_eq!(items[1]["name"], "Home");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_by_id(pool: PgPool) {
    let id = common::seed_category(&pool, "Get Me", "#ABCDEF").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_with_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_partial(pool: PgPool) {
    let id = common::seed_category(&pool, "Original", "#111111").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/categories/{id}"),
        serde_json::json!({"color": "#999999"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Original");
    assert_eq!(json["color"], "#999999");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/categories/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_with_invalid_color_returns_400(pool: PgPool) {
    let id = common::seed_category(&pool, "Valid", "#111111").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/categories/{id}"),
        serde_json::json!({"color": "red"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category_returns_204(pool: PgPool) {
    let id = common::seed_category(&pool, "Delete Me", "#123456").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_referenced_category_returns_409(pool: PgPool) {
    let id = common::seed_category(&pool, "Busy", "#FF0000").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/tasks",
        serde_json::json!({
            "title": "Keeps the category alive",
            "category_id": id,
            "priority": "medium",
            "status": "pending",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
