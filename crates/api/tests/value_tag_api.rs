//! Integration tests for the value tag dictionary: deep-dive capture,
//! listing, detail, and deletion.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Deep-dive capture
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_answer_is_stored_as_null(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/value-tags",
        json!({ "label": "自分のペースを守ること", "answer": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["label"], "自分のペースを守ること");
    assert!(body["data"]["answer"].is_null());
    assert!(body["data"]["diary_entry_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tag_links_to_its_originating_entry(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(app.clone(), "/api/v1/entries", json!({ "fact": "散歩した" })).await,
    )
    .await;
    let entry_id = created["data"]["entry"]["id"].as_i64().unwrap();
    let suggested = created["data"]["perspective"]["value_tag"].clone();

    let response = post_json(
        app,
        "/api/v1/value-tags",
        json!({
            "label": suggested,
            "answer": "急かされると視野が狭くなる",
            "diary_entry_id": entry_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["label"], "自分のペースを守ること");
    assert_eq!(body["data"]["answer"], "急かされると視野が狭くなる");
    assert_eq!(body["data"]["diary_entry_id"].as_i64().unwrap(), entry_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tag_with_unknown_entry_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/value-tags",
        json!({ "label": "安心", "diary_entry_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_label_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/value-tags", json!({ "label": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM value_tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Dictionary listing & detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn dictionary_lists_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    for label in ["尊重", "公平", "成長"] {
        post_json(app.clone(), "/api/v1/value-tags", json!({ "label": label })).await;
    }

    let body = body_json(get(app, "/api/v1/value-tags").await).await;
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["成長", "公平", "尊重"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tag_detail_roundtrip_and_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/value-tags",
            json!({ "label": "安心", "answer": "落ち着いて考えたい" }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let detail = body_json(get(app.clone(), &format!("/api/v1/value-tags/{id}")).await).await;
    assert_eq!(detail["data"]["label"], "安心");
    assert_eq!(detail["data"]["answer"], "落ち着いて考えたい");
    assert!(detail["data"]["created_at"].is_string());

    let missing = get(app, "/api/v1/value-tags/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_tag_and_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = body_json(
        post_json(app.clone(), "/api/v1/value-tags", json!({ "label": "尊重" })).await,
    )
    .await;
    let second = body_json(
        post_json(app.clone(), "/api/v1/value-tags", json!({ "label": "成長" })).await,
    )
    .await;
    let first_id = first["data"]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/value-tags/{first_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Exactly one tag gone.
    let body = body_json(get(app.clone(), "/api/v1/value-tags").await).await;
    let remaining = body["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], second["data"]["id"]);

    // Deleting the same id again is a no-op, not an error.
    let response = delete(app, &format!("/api/v1/value-tags/{first_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_nonexistent_id_is_a_noop(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/v1/value-tags/424242").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
