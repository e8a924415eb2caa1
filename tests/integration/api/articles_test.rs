//! Article API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{signup_user, TestApp, TestUser};

async fn create_article(app: &TestApp, author: &TestUser, title: &str) -> String {
    let (status, body) = app
        .post(
            "/api/articles",
            &author.token,
            json!({ "title": title, "content": "We walked by the river" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["article_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_and_read_article() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", Some("Mango")).await;
    let bob = signup_user(&app, "bob", None).await;

    let article_id = create_article(&app, &alice, "First walk").await;

    // readable by any signed-in user
    let (status, body) = app
        .get(&format!("/api/articles/{}", article_id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "First walk");
    assert_eq!(body["user_id"], alice.id.to_string());
}

#[tokio::test]
async fn test_invalid_article_is_rejected() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app
        .post("/api/articles", &alice.token, json!({ "title": "  ", "content": "text" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = app
        .post("/api/articles", &alice.token, json!({ "title": "Walk", "content": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_author_can_edit_or_delete() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;
    let article_id = create_article(&app, &alice, "First walk").await;
    let uri = format!("/api/articles/{}", article_id);

    let (status, body) = app
        .put(&uri, &bob.token, json!({ "title": "Mine now", "content": "x" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = app.delete(&uri, &bob.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .put(&uri, &alice.token, json!({ "title": "Last walk", "content": "Rainy" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Last walk");
    assert_eq!(body["content"], "Rainy");

    let (status, _) = app.delete(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ARTICLE_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_article_is_not_found() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let uri = format!("/api/articles/{}", Uuid::new_v4());

    let (status, body) = app.get(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ARTICLE_NOT_FOUND");

    let (status, _) = app.delete(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_user_articles_newest_first() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;
    for title in ["one", "two", "three"] {
        create_article(&app, &alice, title).await;
    }
    create_article(&app, &bob, "bob's").await;

    let (status, body) = app
        .get(&format!("/api/users/{}/articles?size=2", alice.id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["three", "two"]);
    assert_eq!(body["has_more"], true);

    let (_, body) = app
        .get(&format!("/api/users/{}/articles?page=1&size=2", alice.id), &bob.token)
        .await;
    assert_eq!(body["articles"][0]["title"], "one");
    assert_eq!(body["has_more"], false);

    let (status, body) = app
        .get(&format!("/api/users/{}/articles", Uuid::new_v4()), &bob.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
}
