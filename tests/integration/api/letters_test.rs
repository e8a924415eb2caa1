//! Letter API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{signup_user, TestApp};

#[tokio::test]
async fn test_post_and_read_letter() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app
        .post("/api/letters", &alice.token, json!({ "content": "Dear Mango" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let letter_id = body["letter_id"].as_str().unwrap().to_string();

    let (status, body) = app
        .get(&format!("/api/letters/{}", letter_id), &alice.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Dear Mango");
    assert_eq!(body["user_id"], alice.id.to_string());
}

#[tokio::test]
async fn test_blank_letter_is_rejected() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, _) = app
        .post("/api/letters", &alice.token, json!({ "content": "   " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_letters_newest_first_with_default_page_size() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    for i in 0..6 {
        app.post("/api/letters", &alice.token, json!({ "content": format!("letter {i}") }))
            .await;
    }
    app.post("/api/letters", &bob.token, json!({ "content": "bob's letter" }))
        .await;

    let (status, body) = app.get("/api/letters", &alice.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["size"], 4);
    assert_eq!(body["has_more"], true);
    let contents: Vec<&str> = body["letters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["letter 5", "letter 4", "letter 3", "letter 2"]);

    let (_, body) = app.get("/api/letters?page=1", &alice.token).await;
    assert_eq!(body["has_more"], false);
    assert_eq!(body["letters"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_letter_detail_errors() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    let (status, body) = app
        .get(&format!("/api/letters/{}", Uuid::new_v4()), &alice.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LETTER_NOT_FOUND");

    let (_, body) = app
        .post("/api/letters", &alice.token, json!({ "content": "private" }))
        .await;
    let letter_id = body["letter_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .get(&format!("/api/letters/{}", letter_id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
