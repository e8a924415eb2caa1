//! Community HTTP Handlers
//!
//! The creator owns a community and is its first member. Only the owner may
//! edit or delete it; anyone signed in may join once.

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::communities::{
    Community, CommunityRequest, CommunityResponse, MAX_COMMUNITY_TITLE_LEN,
};
use crate::shared::error::{SharedError, StoreError};

/// Trimmed title and description, or the first validation failure
fn validate(request: &CommunityRequest) -> Result<(String, String), SharedError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title must not be blank"));
    }
    if title.chars().count() > MAX_COMMUNITY_TITLE_LEN {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", MAX_COMMUNITY_TITLE_LEN),
        ));
    }
    Ok((title.to_string(), request.description.trim().to_string()))
}

async fn find_community(state: &AppState, community_id: Uuid) -> Result<Community, BackendError> {
    state
        .communities
        .find_community(community_id)
        .await?
        .ok_or_else(|| BackendError::not_found("COMMUNITY_NOT_FOUND", "Community not found"))
}

/// Load a community the caller owns
async fn find_owned_community(
    state: &AppState,
    caller: Uuid,
    community_id: Uuid,
) -> Result<Community, BackendError> {
    let community = find_community(state, community_id).await?;
    if community.owner_id != caller {
        tracing::warn!("User {} tried to modify community {}", caller, community_id);
        return Err(BackendError::forbidden("Community belongs to another user"));
    }
    Ok(community)
}

async fn with_member_count(
    state: &AppState,
    community: Community,
) -> Result<CommunityResponse, BackendError> {
    let member_count = state.communities.member_count(community.id).await?;
    Ok(CommunityResponse {
        community,
        member_count,
    })
}

/// Create a community owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - Blank or overlong title
pub async fn create_community(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<CommunityRequest>,
) -> Result<(StatusCode, Json<CommunityResponse>), BackendError> {
    let (title, description) = validate(&request)?;

    let community = Community::new(caller.user_id, title, description);
    state.communities.create_community(&community).await?;

    tracing::info!("Community {} created by {}", community.id, caller.user_id);

    Ok((
        StatusCode::CREATED,
        Json(with_member_count(&state, community).await?),
    ))
}

/// Community detail with its member count
///
/// # Errors
///
/// * `404 COMMUNITY_NOT_FOUND` - No such community
pub async fn get_community(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    ApiPath(community_id): ApiPath<Uuid>,
) -> Result<Json<CommunityResponse>, BackendError> {
    let community = find_community(&state, community_id).await?;
    Ok(Json(with_member_count(&state, community).await?))
}

/// Edit a community
///
/// # Errors
///
/// * `400 Bad Request` - Blank or overlong title
/// * `404 COMMUNITY_NOT_FOUND` - No such community
/// * `403 Forbidden` - The caller is not the owner
pub async fn update_community(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(community_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<CommunityRequest>,
) -> Result<Json<CommunityResponse>, BackendError> {
    find_owned_community(&state, caller.user_id, community_id).await?;
    let (title, description) = validate(&request)?;

    let community = state
        .communities
        .update_community(community_id, &title, &description)
        .await?
        .ok_or_else(|| BackendError::not_found("COMMUNITY_NOT_FOUND", "Community not found"))?;

    Ok(Json(with_member_count(&state, community).await?))
}

/// Delete a community and its memberships
///
/// # Errors
///
/// * `404 COMMUNITY_NOT_FOUND` - No such community
/// * `403 Forbidden` - The caller is not the owner
pub async fn delete_community(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(community_id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    find_owned_community(&state, caller.user_id, community_id).await?;

    if !state.communities.delete_community(community_id).await? {
        return Err(BackendError::not_found("COMMUNITY_NOT_FOUND", "Community not found"));
    }

    tracing::info!("Community {} deleted by {}", community_id, caller.user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Join a community
///
/// # Errors
///
/// * `404 COMMUNITY_NOT_FOUND` - No such community
/// * `409 ALREADY_JOINED` - The caller is already a member (owners included)
pub async fn join_community(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(community_id): ApiPath<Uuid>,
) -> Result<Json<CommunityResponse>, BackendError> {
    let community = find_community(&state, community_id).await?;

    state
        .communities
        .add_member(community_id, caller.user_id)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => {
                BackendError::conflict("ALREADY_JOINED", "Already a member of this community")
            }
            other => other.into(),
        })?;

    tracing::info!("User {} joined community {}", caller.user_id, community_id);

    Ok(Json(with_member_count(&state, community).await?))
}
