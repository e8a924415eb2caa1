//! Community Data Structures
//!
//! A community is a named group owned by the user who created it. The owner
//! is its first member; other users join explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted community title
pub const MAX_COMMUNITY_TITLE_LEN: usize = 50;

/// A stored community
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Community {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn new(owner_id: Uuid, title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            created_at: Utc::now(),
        }
    }
}

/// Body of create and edit requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A community with its current member count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityResponse {
    #[serde(flatten)]
    pub community: Community,
    pub member_count: i64,
}
