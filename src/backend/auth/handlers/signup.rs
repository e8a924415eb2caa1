/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Validation
 *
 * - Username must be 3-30 chars, start with a letter, alphanumeric + underscore
 * - Email must contain '@' character (basic validation)
 * - Password must be at least 8 characters long
 * - Username and email must be unique
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::error::{SharedError, StoreError};

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check the signup request before anything is stored
fn validate(request: &SignupRequest) -> Result<(), SharedError> {
    if !is_valid_username(&request.username) {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    if !request.email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(SharedError::validation("password", "Password must be at least 8 characters"));
    }
    Ok(())
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid username, email or password
/// * `409 Conflict` - Username or email already taken
/// * `500 Internal Server Error` - Hashing, storage or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "mango_owner",
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "pet_name": "Mango"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for username: {}, email: {}", request.username, request.email);

    validate(&request).map_err(|e| {
        tracing::warn!("Rejected signup: {}", e);
        e
    })?;

    if state.users.get_user_by_username(&request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::conflict("USERNAME_TAKEN", "Username already taken"));
    }

    if state.users.get_user_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("EMAIL_TAKEN", "Email already registered"));
    }

    let password_hash = hash(&request.password, state.auth.bcrypt_cost)?;

    let pet_name = request
        .pet_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let user = state
        .users
        .create_user(NewUser {
            username: request.username,
            email: request.email,
            password_hash,
            pet_name,
        })
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent signup for the same name or email
            StoreError::Conflict(constraint) => {
                tracing::warn!("Signup conflict on {}", constraint);
                BackendError::conflict("USER_ALREADY_EXISTS", "Username or email already registered")
            }
            other => other.into(),
        })?;

    let token = create_token(&state.auth, user.id, user.email.clone())?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
