//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens through the
//! public signup endpoint.

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use super::app::TestApp;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Sign up a user through the API
pub async fn signup_user(app: &TestApp, username: &str, pet_name: Option<&str>) -> TestUser {
    let email = format!("{}@example.com", username);
    let password = "test_password_123".to_string();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/signup",
            None,
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
                "pet_name": pet_name,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");

    TestUser {
        id: body["user"]["id"].as_str().unwrap().parse().unwrap(),
        username: username.to_string(),
        email,
        password,
        token: body["token"].as_str().unwrap().to_string(),
    }
}
