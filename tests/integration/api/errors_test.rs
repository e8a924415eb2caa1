//! Error body integration tests
//!
//! Malformed input rejected by the extractors must still produce the JSON
//! `{error, code, status}` body.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{signup_user, TestApp};

#[tokio::test]
async fn test_malformed_uuid_in_body_returns_json_error() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app
        .post("/api/friends", &alice.token, json!({ "friend_id": "not-a-uuid" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
    assert_eq!(body["status"], 422);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_field_in_signup_returns_json_error() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/signup",
            None,
            Some(json!({ "username": "alice" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn test_malformed_path_id_returns_json_error() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app.get("/api/friends/not-a-uuid", &alice.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["status"], 400);

    let (status, body) = app.get("/api/letters/12345", &alice.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_query_returns_json_error() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app.get("/api/letters?page=first", &alice.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["status"], 400);

    let (status, body) = app
        .get("/api/users/search?pet_name=Mango&size=-1", &alice.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
