//! Friend Data Structures
//!
//! Request and response bodies for the friend endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to add a friend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendRequest {
    /// ID of the user to befriend
    pub friend_id: Uuid,
}

/// Response after adding a friend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendResponse {
    pub success: bool,
    /// Endpoint with the smaller identity
    pub lower_user_id: Uuid,
    /// Endpoint with the larger identity
    pub higher_user_id: Uuid,
}

/// Public profile of a friend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendSummary {
    pub id: Uuid,
    pub username: String,
    pub pet_name: Option<String>,
}

/// Response for listing friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFriendsResponse {
    pub friends: Vec<FriendSummary>,
}

/// Response for checking a single friendship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipStatusResponse {
    pub friend_id: Uuid,
    pub friends: bool,
}
