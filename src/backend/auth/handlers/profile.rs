/**
 * Profile Handlers
 *
 * PUT /api/users/me edits the caller's pet name; GET /api/users/search
 * finds users by pet name.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{
    PublicUser, SearchUsersQuery, SearchUsersResponse, UpdateProfileRequest, UserResponse,
};
use crate::backend::auth::users::UserDirectory;
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::backend::middleware::AuthUser;
use crate::shared::error::SharedError;
use crate::shared::letters::PageParams;

/// Default number of search results per page
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;

/// Longest accepted pet name
const MAX_PET_NAME_LEN: usize = 50;

/// Edit the caller's profile
///
/// A blank pet name clears it.
pub async fn update_profile(
    State(users): State<Arc<dyn UserDirectory>>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pet_name = request
        .pet_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    if let Some(name) = &pet_name {
        if name.chars().count() > MAX_PET_NAME_LEN {
            return Err(SharedError::validation("pet_name", "Pet name must be at most 50 characters").into());
        }
    }

    let user = users
        .update_pet_name(caller.user_id, pet_name)
        .await?
        .ok_or_else(|| BackendError::not_found("USER_NOT_FOUND", "User not found"))?;

    tracing::info!("Profile updated for {}", user.id);

    Ok(Json(user.into()))
}

/// Search users whose pet name contains the query
///
/// # Errors
///
/// * `400 Bad Request` - The query is blank
pub async fn search_users(
    State(users): State<Arc<dyn UserDirectory>>,
    AuthUser(_caller): AuthUser,
    ApiQuery(query): ApiQuery<SearchUsersQuery>,
) -> Result<Json<SearchUsersResponse>, BackendError> {
    let needle = query.pet_name.trim();
    if needle.is_empty() {
        return Err(SharedError::validation("pet_name", "Search query must not be blank").into());
    }

    let params = PageParams {
        page: query.page,
        size: query.size,
    };
    let (page, size) = params.resolve(DEFAULT_SEARCH_PAGE_SIZE);
    let (limit, offset) = params.limit_offset(DEFAULT_SEARCH_PAGE_SIZE);

    let found = users.search_by_pet_name(needle, limit, offset).await?;

    Ok(Json(SearchUsersResponse {
        users: found.into_iter().map(PublicUser::from).collect(),
        page,
        size,
    }))
}
