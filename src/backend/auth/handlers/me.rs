/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * The route sits behind `auth_middleware`, so the token has already been
 * verified when the handler runs.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::UserDirectory;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is missing or invalid
/// * `404 USER_NOT_FOUND` - If the user disappeared after authentication
pub async fn get_me(
    State(users): State<Arc<dyn UserDirectory>>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = users
        .get_user_by_id(caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", caller.user_id);
            BackendError::not_found("USER_NOT_FOUND", "User not found")
        })?;

    Ok(Json(user.into()))
}
