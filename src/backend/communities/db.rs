//! Database operations for communities
//!
//! The `CommunityStore` trait with a Postgres implementation and an in-memory
//! one. Membership is a set of `(community, user)` pairs; adding a pair that
//! is already present is a `StoreError::Conflict`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::communities::Community;
use crate::shared::error::{StoreError, StoreResult};

/// Constraint reported when a user joins a community twice
pub const MEMBERSHIP_KEY: &str = "community_members_pkey";

/// Persistence of communities and their members
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Store the community with its owner as the first member
    async fn create_community(&self, community: &Community) -> StoreResult<()>;

    async fn find_community(&self, community_id: Uuid) -> StoreResult<Option<Community>>;

    /// Replace title and description; `None` when the community does not exist
    async fn update_community(
        &self,
        community_id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<Option<Community>>;

    /// Remove the community and its memberships
    async fn delete_community(&self, community_id: Uuid) -> StoreResult<bool>;

    /// `StoreError::Conflict` when the user is already a member
    async fn add_member(&self, community_id: Uuid, user_id: Uuid) -> StoreResult<()>;

    async fn member_count(&self, community_id: Uuid) -> StoreResult<i64>;
}

/// Postgres-backed community store
#[derive(Clone)]
pub struct PgCommunityStore {
    pool: PgPool,
}

impl PgCommunityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityStore for PgCommunityStore {
    async fn create_community(&self, community: &Community) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO communities (id, owner_id, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(community.id)
        .bind(community.owner_id)
        .bind(&community.title)
        .bind(&community.description)
        .bind(community.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO community_members (community_id, user_id, joined_at) VALUES ($1, $2, $3)",
        )
        .bind(community.id)
        .bind(community.owner_id)
        .bind(community.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_community(&self, community_id: Uuid) -> StoreResult<Option<Community>> {
        let community = sqlx::query_as::<_, Community>(
            "SELECT id, owner_id, title, description, created_at FROM communities WHERE id = $1",
        )
        .bind(community_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(community)
    }

    async fn update_community(
        &self,
        community_id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<Option<Community>> {
        let community = sqlx::query_as::<_, Community>(
            r#"
            UPDATE communities
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, owner_id, title, description, created_at
            "#,
        )
        .bind(community_id)
        .bind(title)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(community)
    }

    async fn delete_community(&self, community_id: Uuid) -> StoreResult<bool> {
        // memberships go with the community through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM communities WHERE id = $1")
            .bind(community_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_member(&self, community_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        sqlx::query("INSERT INTO community_members (community_id, user_id) VALUES ($1, $2)")
            .bind(community_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn member_count(&self, community_id: Uuid) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM community_members WHERE community_id = $1",
        )
        .bind(community_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

#[derive(Default)]
struct CommunityTable {
    communities: HashMap<Uuid, Community>,
    members: HashMap<Uuid, HashSet<Uuid>>,
}

/// In-memory community store
#[derive(Clone, Default)]
pub struct MemoryCommunityStore {
    table: Arc<RwLock<CommunityTable>>,
}

impl MemoryCommunityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommunityStore for MemoryCommunityStore {
    async fn create_community(&self, community: &Community) -> StoreResult<()> {
        let mut table = self.table.write().await;
        table.communities.insert(community.id, community.clone());
        table
            .members
            .insert(community.id, HashSet::from([community.owner_id]));
        Ok(())
    }

    async fn find_community(&self, community_id: Uuid) -> StoreResult<Option<Community>> {
        let table = self.table.read().await;
        Ok(table.communities.get(&community_id).cloned())
    }

    async fn update_community(
        &self,
        community_id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<Option<Community>> {
        let mut table = self.table.write().await;
        Ok(table.communities.get_mut(&community_id).map(|community| {
            community.title = title.to_string();
            community.description = description.to_string();
            community.clone()
        }))
    }

    async fn delete_community(&self, community_id: Uuid) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        table.members.remove(&community_id);
        Ok(table.communities.remove(&community_id).is_some())
    }

    async fn add_member(&self, community_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        let mut table = self.table.write().await;
        if !table.members.entry(community_id).or_default().insert(user_id) {
            return Err(StoreError::Conflict(MEMBERSHIP_KEY.to_string()));
        }
        Ok(())
    }

    async fn member_count(&self, community_id: Uuid) -> StoreResult<i64> {
        let table = self.table.read().await;
        Ok(table.members.get(&community_id).map_or(0, |members| members.len() as i64))
    }
}
