//! HTTP-level integration tests for the `/api/prompts` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_prompt(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/prompts", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list_prompts(pool: &PgPool) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/prompts").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .expect("list should return an array")
        .clone()
}

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("timestamp should be a string")
        .parse()
        .expect("timestamp should be RFC 3339")
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_returns_201_with_full_record(pool: PgPool) {
    let json = create_prompt(&pool, json!({"title": "A", "content": "B"})).await;

    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["title"], "A");
    assert_eq!(json["content"], "B");
    assert!(json["category"].is_null());
    assert_eq!(json["created_at"], json["updated_at"]);

    let created_at = json["created_at"].as_str().unwrap();
    assert!(created_at.ends_with('Z'), "expected UTC 'Z' suffix, got {created_at}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_with_category(pool: PgPool) {
    let json = create_prompt(
        &pool,
        json!({"title": "Review", "content": "Review this diff", "category": "coding"}),
    )
    .await;
    assert_eq!(json["category"], "coding");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_content_returns_400_and_creates_nothing(pool: PgPool) {
    let before = list_prompts(&pool).await.len();

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/prompts", json!({"title": "A"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Title and content are required");

    assert_eq!(list_prompts(&pool).await.len(), before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/prompts", json!({"content": "B"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/prompts", json!({"title": 5, "content": "B"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_returns_empty_array(pool: PgPool) {
    assert!(list_prompts(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_most_recent_first(pool: PgPool) {
    let first = create_prompt(&pool, json!({"title": "P1", "content": "one"})).await;
    let second = create_prompt(&pool, json!({"title": "P2", "content": "two"})).await;

    let prompts = list_prompts(&pool).await;
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0]["id"], second["id"]);
    assert_eq!(prompts[1]["id"], first["id"]);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_prompt_by_id(pool: PgPool) {
    let created = create_prompt(&pool, json!({"title": "Get Me", "content": "body"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/prompts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_prompt_returns_404_for_get_put_delete(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/prompts/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/prompts/99999", json!({"title": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/prompts/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_integer_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/prompts/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category_only(pool: PgPool) {
    let created = create_prompt(&pool, json!({"title": "T", "content": "C"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/prompts/{id}"),
        json!({"category": "writing"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "T");
    assert_eq!(json["content"], "C");
    assert_eq!(json["category"], "writing");
    assert_eq!(json["created_at"], created["created_at"]);
    assert!(timestamp(&json["updated_at"]) > timestamp(&created["updated_at"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_null_category_clears_it(pool: PgPool) {
    let created = create_prompt(
        &pool,
        json!({"title": "T", "content": "C", "category": "misc"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/prompts/{id}"), json!({"category": null})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["category"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_title_keeps_category(pool: PgPool) {
    let created = create_prompt(
        &pool,
        json!({"title": "T", "content": "C", "category": "misc"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/prompts/{id}"), json!({"title": "Renamed"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/prompts/{id}")).await).await;
    assert_eq!(json["title"], "Renamed");
    assert_eq!(json["category"], "misc");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_empty_title_returns_400_and_keeps_record(pool: PgPool) {
    let created = create_prompt(&pool, json!({"title": "T", "content": "C"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/prompts/{id}"), json!({"title": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Title must not be empty");
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/prompts/{id}")).await).await;
    assert_eq!(json, created);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_prompt_then_get_returns_404(pool: PgPool) {
    let created = create_prompt(&pool, json!({"title": "Delete Me", "content": "x"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/prompts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Prompt deleted successfully");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/prompts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
