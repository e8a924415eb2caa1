//! Friend API integration tests

use axum::http::{Method, StatusCode};
use futures_util::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{send_to, signup_user, TestApp};

#[tokio::test]
async fn test_add_friend_stores_canonical_pair() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    let (status, body) = app
        .post("/api/friends", &alice.token, json!({ "friend_id": bob.id }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (lower, higher) = if alice.id < bob.id {
        (alice.id, bob.id)
    } else {
        (bob.id, alice.id)
    };
    assert_eq!(body["lower_user_id"], lower.to_string());
    assert_eq!(body["higher_user_id"], higher.to_string());
}

#[tokio::test]
async fn test_friendship_is_visible_from_both_sides() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", Some("Mango")).await;
    let bob = signup_user(&app, "bob", Some("Biscuit")).await;

    app.post("/api/friends", &alice.token, json!({ "friend_id": bob.id }))
        .await;

    let (_, alice_view) = app.get("/api/friends", &alice.token).await;
    assert_eq!(alice_view["friends"].as_array().unwrap().len(), 1);
    assert_eq!(alice_view["friends"][0]["id"], bob.id.to_string());
    assert_eq!(alice_view["friends"][0]["pet_name"], "Biscuit");

    let (_, bob_view) = app.get("/api/friends", &bob.token).await;
    assert_eq!(bob_view["friends"][0]["id"], alice.id.to_string());
    assert_eq!(bob_view["friends"][0]["username"], "alice");

    let (status, body) = app
        .get(&format!("/api/friends/{}", alice.id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["friends"], true);

    let (_, body) = app
        .get(&format!("/api/friends/{}", bob.id), &alice.token)
        .await;
    assert_eq!(body["friends"], true);
}

#[tokio::test]
async fn test_reverse_duplicate_is_rejected() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    app.post("/api/friends", &alice.token, json!({ "friend_id": bob.id }))
        .await;

    let (status, body) = app
        .post("/api/friends", &bob.token, json!({ "friend_id": alice.id }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FRIEND_ALREADY_EXISTS");

    let (status, body) = app
        .post("/api/friends", &alice.token, json!({ "friend_id": bob.id }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FRIEND_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_self_friendship_is_rejected() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app
        .post("/api/friends", &alice.token, json!({ "friend_id": alice.id }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SELF_FRIEND_REQUEST_NOT_ALLOWED");

    let (_, body) = app.get("/api/friends", &alice.token).await;
    assert_eq!(body["friends"], json!([]));
}

#[tokio::test]
async fn test_unknown_friend_is_not_found() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;

    let (status, body) = app
        .post(
            "/api/friends",
            &alice.token,
            json!({ "friend_id": Uuid::new_v4() }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "FRIEND_NOT_FOUND");
}

#[tokio::test]
async fn test_remove_friend() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    app.post("/api/friends", &alice.token, json!({ "friend_id": bob.id }))
        .await;

    let (status, body) = app
        .delete(&format!("/api/friends/{}", alice.id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["friends"], false);

    let (_, body) = app
        .get(&format!("/api/friends/{}", bob.id), &alice.token)
        .await;
    assert_eq!(body["friends"], false);

    let (status, body) = app
        .delete(&format!("/api/friends/{}", alice.id), &bob.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "FRIENDSHIP_NOT_FOUND");

    // Friends again after removal
    let (status, _) = app
        .post("/api/friends", &bob.token, json!({ "friend_id": alice.id }))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_create_one_friendship() {
    let app = TestApp::new();
    let alice = signup_user(&app, "alice", None).await;
    let bob = signup_user(&app, "bob", None).await;

    let requests = (0..16).map(|i| {
        let router = app.router.clone();
        let (token, friend) = if i % 2 == 0 {
            (alice.token.clone(), bob.id)
        } else {
            (bob.token.clone(), alice.id)
        };
        tokio::spawn(async move {
            send_to(
                router,
                Method::POST,
                "/api/friends",
                Some(&token),
                Some(json!({ "friend_id": friend })),
            )
            .await
        })
    });

    let results: Vec<_> = join_all(requests)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let created = results.iter().filter(|(status, _)| *status == StatusCode::OK).count();
    assert_eq!(created, 1);
    for (status, body) in results.iter().filter(|(status, _)| *status != StatusCode::OK) {
        assert_eq!(*status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "FRIEND_ALREADY_EXISTS");
    }

    let (_, body) = app.get("/api/friends", &alice.token).await;
    assert_eq!(body["friends"].as_array().unwrap().len(), 1);
    assert!(app.state.ledger.edge_exists(bob.id, alice.id).await.unwrap());
}
