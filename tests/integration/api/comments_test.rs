//! Comment API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use tostar::backend::comments::CommentStore;
use uuid::Uuid;

use crate::common::{signup_user, TestApp, TestUser};

async fn create_article(app: &TestApp, author: &TestUser) -> String {
    let (_, body) = app
        .post(
            "/api/articles",
            &author.token,
            json!({ "title": "First walk", "content": "Sunny" }),
        )
        .await;
    body["article_id"].as_str().unwrap().to_string()
}

async fn comment(app: &TestApp, user: &TestUser, article_id: &str, content: &str) -> String {
    let (status, body) = app
        .post(
            &format!("/api/articles/{}/comments", article_id),
            &user.token,
            json!({ "content": content }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "comment failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_comments_are_listed_newest_first() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;
    let article_id = create_article(&app, &alice).await;

    comment(&app, &bob, &article_id, "lovely").await;
    comment(&app, &alice, &article_id, "thank you").await;

    let (status, body) = app
        .get(&format!("/api/articles/{}/comments", article_id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "thank you");
    assert_eq!(comments[1]["content"], "lovely");
    assert_eq!(comments[1]["user_id"], bob.id.to_string());
    assert_eq!(comments[1]["article_id"], article_id);
}

#[tokio::test]
async fn test_comment_on_unknown_article() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let uri = format!("/api/articles/{}/comments", Uuid::new_v4());

    let (status, body) = app.post(&uri, &alice.token, json!({ "content": "hi" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ARTICLE_NOT_FOUND");

    let (status, _) = app.get(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_comment_is_rejected() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let article_id = create_article(&app, &alice).await;

    let (status, _) = app
        .post(
            &format!("/api/articles/{}/comments", article_id),
            &alice.token,
            json!({ "content": "  " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_author_can_edit_or_delete_comment() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;
    let article_id = create_article(&app, &alice).await;
    let comment_id = comment(&app, &bob, &article_id, "lovely").await;
    let uri = format!("/api/articles/{}/comments/{}", article_id, comment_id);

    let (status, _) = app.put(&uri, &alice.token, json!({ "content": "edited" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete(&uri, &alice.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.put(&uri, &bob.token, json!({ "content": "so lovely" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "so lovely");

    let (status, _) = app.delete(&uri, &bob.token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.delete(&uri, &bob.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_comment_must_belong_to_article_in_path() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let first = create_article(&app, &alice).await;
    let second = create_article(&app, &alice).await;
    let comment_id = comment(&app, &alice, &first, "on the first").await;

    let (status, body) = app
        .put(
            &format!("/api/articles/{}/comments/{}", second, comment_id),
            &alice.token,
            json!({ "content": "moved" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_deleting_article_removes_comments() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let article_id = create_article(&app, &alice).await;
    let comment_id = comment(&app, &alice, &article_id, "note").await;

    let (status, _) = app
        .delete(&format!("/api/articles/{}", article_id), &alice.token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let comment_id: Uuid = comment_id.parse().unwrap();
    assert_eq!(app.state.comments.find_comment(comment_id).await.unwrap(), None);
}
