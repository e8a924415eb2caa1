//! Friend HTTP Handlers
//!
//! Thin HTTP layer over [`RelationshipLedger`]. The caller identity always
//! comes from the verified token; only the other endpoint comes from the
//! request.

use axum::{extract::State, Json};
use futures_util::TryStreamExt;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::ledger::{FriendEdge, LedgerError, RelationshipLedger};
use crate::shared::friends::{
    AddFriendRequest, AddFriendResponse, FriendSummary, FriendshipStatusResponse,
    ListFriendsResponse,
};

/// Add a friend
///
/// # Errors
///
/// * `404 FRIEND_NOT_FOUND` - The target user does not exist
/// * `409 SELF_FRIEND_REQUEST_NOT_ALLOWED` - The caller targeted themselves
/// * `409 FRIEND_ALREADY_EXISTS` - The friendship already exists
pub async fn add_friend(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<AddFriendRequest>,
) -> Result<Json<AddFriendResponse>, BackendError> {
    tracing::info!("Friend request from {} to {}", caller.user_id, request.friend_id);

    if !state.users.identity_exists(request.friend_id).await? {
        tracing::warn!("Friend target not found: {}", request.friend_id);
        return Err(BackendError::not_found("FRIEND_NOT_FOUND", "Friend not found"));
    }

    let edge = propose_resolving_conflict(&state.ledger, caller.user_id, request.friend_id).await?;

    Ok(Json(AddFriendResponse {
        success: true,
        lower_user_id: edge.lower_user_id,
        higher_user_id: edge.higher_user_id,
    }))
}

/// Propose a friendship, resolving a lost insert race
///
/// A `StoreConflict` is re-checked once: if the edge is now visible the
/// request is a duplicate, otherwise the proposal is retried a single time.
async fn propose_resolving_conflict(
    ledger: &RelationshipLedger,
    requester: Uuid,
    target: Uuid,
) -> Result<FriendEdge, LedgerError> {
    match ledger.propose_friendship(requester, target).await {
        Err(LedgerError::StoreConflict { lower, higher }) => {
            if ledger.edge_exists(lower, higher).await? {
                Err(LedgerError::DuplicateRelationship { lower, higher })
            } else {
                tracing::debug!(%lower, %higher, "retrying friendship after transient conflict");
                ledger.propose_friendship(requester, target).await
            }
        }
        other => other,
    }
}

/// List the caller's friends with their public profiles
pub async fn list_friends(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<ListFriendsResponse>, BackendError> {
    let friend_ids: Vec<Uuid> = state.ledger.list_friends(caller.user_id).try_collect().await?;

    let mut friends = Vec::with_capacity(friend_ids.len());
    for friend_id in friend_ids {
        match state.users.get_user_by_id(friend_id).await? {
            Some(user) => friends.push(FriendSummary {
                id: user.id,
                username: user.username,
                pet_name: user.pet_name,
            }),
            None => tracing::warn!("Friend {} of {} has no user record", friend_id, caller.user_id),
        }
    }

    Ok(Json(ListFriendsResponse { friends }))
}

/// Whether the caller and `friend_id` are friends
pub async fn friendship_status(
    State(ledger): State<RelationshipLedger>,
    AuthUser(caller): AuthUser,
    ApiPath(friend_id): ApiPath<Uuid>,
) -> Result<Json<FriendshipStatusResponse>, BackendError> {
    let friends = ledger.edge_exists(caller.user_id, friend_id).await?;
    Ok(Json(FriendshipStatusResponse { friend_id, friends }))
}

/// Unfriend `friend_id`
///
/// # Errors
///
/// * `404 FRIENDSHIP_NOT_FOUND` - The two users are not friends
pub async fn remove_friend(
    State(ledger): State<RelationshipLedger>,
    AuthUser(caller): AuthUser,
    ApiPath(friend_id): ApiPath<Uuid>,
) -> Result<Json<FriendshipStatusResponse>, BackendError> {
    ledger.dissolve_friendship(caller.user_id, friend_id).await?;
    Ok(Json(FriendshipStatusResponse {
        friend_id,
        friends: false,
    }))
}
