//! API Integration Tests
//!
//! The full router runs in-process over in-memory repositories.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::{Method, StatusCode};
use integration_tests::{
    assert_fail, config_with_burst, TestApp, COMMENT_CONTENT, COMMENT_ID, OTHER_USER, OWNER,
    THREAD_BODY, THREAD_ID, THREAD_TITLE,
};
use serde_json::json;

fn app() -> TestApp {
    TestApp::new().expect("Failed to build test app")
}

fn seeded_app() -> TestApp {
    let app = app();
    app.store
        .seed_thread(THREAD_ID, THREAD_TITLE, THREAD_BODY, OWNER);
    app.store
        .seed_comment(COMMENT_ID, THREAD_ID, OWNER, COMMENT_CONTENT);
    app
}

fn comment_uri(thread_id: &str) -> String {
    format!("/threads/{thread_id}/comments")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let response = app().get("/health").await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let response = app().get("/health/ready").await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["checks"]["database"], "not_configured");
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_post_thread() {
    let app = app();

    let response = app
        .post_as(
            OWNER,
            "/threads",
            json!({ "title": THREAD_TITLE, "body": THREAD_BODY }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    let added = &response.body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], THREAD_TITLE);
    assert_eq!(added["owner"], OWNER);
}

#[tokio::test]
async fn test_post_thread_ignores_owner_in_body() {
    let app = app();

    let response = app
        .post_as(
            OWNER,
            "/threads",
            json!({ "title": THREAD_TITLE, "body": THREAD_BODY, "owner": "someone-else" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["addedThread"]["owner"], OWNER);
}

#[tokio::test]
async fn test_post_thread_requires_auth() {
    let response = app()
        .send(
            Method::POST,
            "/threads",
            None,
            Some(json!({ "title": THREAD_TITLE, "body": THREAD_BODY })),
        )
        .await
        .unwrap();

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Missing authentication");
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_post_thread_rejects_bad_token() {
    let response = app()
        .send(
            Method::POST,
            "/threads",
            Some("not-a-token"),
            Some(json!({ "title": THREAD_TITLE, "body": THREAD_BODY })),
        )
        .await
        .unwrap();

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_post_thread_missing_property() {
    let response = app()
        .post_as(OWNER, "/threads", json!({ "title": THREAD_TITLE }))
        .await
        .unwrap();

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "Thread gagal dibuat. Informasi masih kurang lengkap",
    );
}

#[tokio::test]
async fn test_post_thread_wrong_type() {
    let response = app()
        .post_as(OWNER, "/threads", json!({ "title": THREAD_TITLE, "body": 123 }))
        .await
        .unwrap();

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "Thread gagal dibuat. Bentuk informasi kurang sesuai",
    );
}

#[tokio::test]
async fn test_get_thread_detail() {
    let app = seeded_app();

    let response = app.get(&format!("/threads/{THREAD_ID}")).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    let thread = &response.body["data"]["thread"];
    assert_eq!(thread["id"], THREAD_ID);
    assert_eq!(thread["title"], THREAD_TITLE);
    assert_eq!(thread["body"], THREAD_BODY);
    assert_eq!(thread["username"], OWNER);
    assert!(thread["date"].as_str().unwrap().ends_with('Z'));

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"], COMMENT_ID);
    assert_eq!(comments[0]["username"], OWNER);
    assert_eq!(comments[0]["content"], COMMENT_CONTENT);
}

#[tokio::test]
async fn test_get_thread_without_comments() {
    let app = app();
    app.store
        .seed_thread(THREAD_ID, THREAD_TITLE, THREAD_BODY, OWNER);

    let response = app.get(&format!("/threads/{THREAD_ID}")).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["thread"]["comments"], json!([]));
}

#[tokio::test]
async fn test_get_missing_thread() {
    let response = app().get("/threads/thread-123").await.unwrap();
    assert_fail(&response, StatusCode::NOT_FOUND, "Thread tidak ada");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_post_comment() {
    let app = seeded_app();

    let response = app
        .post_as(OWNER, &comment_uri(THREAD_ID), json!({ "content": "Need Help" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "Need Help");
    assert_eq!(added["owner"], OWNER);
}

#[tokio::test]
async fn test_post_comment_requires_auth() {
    let response = app()
        .send(
            Method::POST,
            &comment_uri(THREAD_ID),
            None,
            Some(json!({ "content": "Need Help!!" })),
        )
        .await
        .unwrap();

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_post_comment_on_missing_thread() {
    let response = seeded_app()
        .post_as(OWNER, &comment_uri("thread-123"), json!({ "content": "Need Help!!" }))
        .await
        .unwrap();

    assert_fail(&response, StatusCode::NOT_FOUND, "Thread tidak ada");
}

#[tokio::test]
async fn test_post_comment_wrong_type() {
    let response = seeded_app()
        .post_as(OWNER, &comment_uri(THREAD_ID), json!({ "content": 123 }))
        .await
        .unwrap();

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "Gagal menambahkan komentar. Bentuk content tidak sesuai",
    );
}

#[tokio::test]
async fn test_post_comment_empty_payload() {
    let response = seeded_app()
        .post_as(OWNER, &comment_uri(THREAD_ID), json!({}))
        .await
        .unwrap();

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "Gagal menambahkan komentar. Properti yang di butuhkan kurang lengkap",
    );
}

#[tokio::test]
async fn test_delete_comment() {
    let app = seeded_app();
    let uri = format!("/threads/{THREAD_ID}/comments/{COMMENT_ID}");

    let response = app.delete_as(OWNER, &uri).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));
    assert_eq!(app.store.is_deleted(COMMENT_ID), Some(true));

    // The comment stays in the thread, redacted
    let detail = app.get(&format!("/threads/{THREAD_ID}")).await.unwrap();
    let comments = detail.body["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn test_delete_comment_twice() {
    let app = seeded_app();
    let uri = format!("/threads/{THREAD_ID}/comments/{COMMENT_ID}");

    app.delete_as(OWNER, &uri).await.unwrap();
    let response = app.delete_as(OWNER, &uri).await.unwrap();

    assert_fail(&response, StatusCode::NOT_FOUND, "Komentar tidak ada");
    assert_eq!(app.store.is_deleted(COMMENT_ID), Some(true));
}

#[tokio::test]
async fn test_delete_comment_requires_auth() {
    let response = seeded_app()
        .send(
            Method::DELETE,
            &format!("/threads/{THREAD_ID}/comments/{COMMENT_ID}"),
            None,
            None,
        )
        .await
        .unwrap();

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_delete_comment_on_missing_thread() {
    let response = seeded_app()
        .delete_as(OWNER, &format!("/threads/thread-123/comments/{COMMENT_ID}"))
        .await
        .unwrap();

    assert_fail(&response, StatusCode::NOT_FOUND, "Thread tidak ada");
}

#[tokio::test]
async fn test_delete_missing_comment() {
    let response = seeded_app()
        .delete_as(OWNER, &format!("/threads/{THREAD_ID}/comments/comment-123"))
        .await
        .unwrap();

    assert_fail(&response, StatusCode::NOT_FOUND, "Komentar tidak ada");
}

#[tokio::test]
async fn test_delete_someone_elses_comment() {
    let app = app();
    app.store
        .seed_thread(THREAD_ID, THREAD_TITLE, THREAD_BODY, OTHER_USER);
    app.store
        .seed_comment(COMMENT_ID, THREAD_ID, OTHER_USER, COMMENT_CONTENT);

    let response = app
        .delete_as(OWNER, &format!("/threads/{THREAD_ID}/comments/{COMMENT_ID}"))
        .await
        .unwrap();

    assert_fail(
        &response,
        StatusCode::FORBIDDEN,
        "Komentar Gagal dihapus. Bukan komentar anda",
    );
    assert_eq!(app.store.is_deleted(COMMENT_ID), Some(false));
}

#[tokio::test]
async fn test_comments_keep_insertion_order() {
    let app = seeded_app();

    for content in ["first", "second"] {
        let response = app
            .post_as(OTHER_USER, &comment_uri(THREAD_ID), json!({ "content": content }))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let detail = app.get(&format!("/threads/{THREAD_ID}")).await.unwrap();
    let contents: Vec<&str> = detail.body["data"]["thread"]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec![COMMENT_CONTENT, "first", "second"]);
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_uses_fail_envelope() {
    let app = TestApp::with_config(config_with_burst(2)).unwrap();

    for _ in 0..2 {
        let response = app.get("/threads/thread-123").await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    let response = app.get("/threads/thread-123").await.unwrap();
    assert_fail(&response, StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded");
}

#[tokio::test]
async fn test_rate_limit_is_per_client() {
    let app = TestApp::with_config(config_with_burst(1)).unwrap();
    let other_client = app.clone().with_client_ip("10.1.2.3");

    assert_eq!(
        app.get("/threads/thread-123").await.unwrap().status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/threads/thread-123").await.unwrap().status,
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        other_client.get("/threads/thread-123").await.unwrap().status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let app = TestApp::with_config(config_with_burst(1)).unwrap();

    for _ in 0..3 {
        assert_eq!(app.get("/health").await.unwrap().status, StatusCode::OK);
    }
}
