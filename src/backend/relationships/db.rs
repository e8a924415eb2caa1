//! Database operations for friend edges
//!
//! Postgres implementation of [`EdgeStore`]. The `friend_edges` primary key
//! on `(lower_user_id, higher_user_id)` enforces at most one edge per pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::PgPool;
use uuid::Uuid;

use crate::ledger::{CanonicalPair, EdgeStore, FriendEdge};
use crate::shared::error::{StoreError, StoreResult};

/// Postgres-backed edge store
#[derive(Clone)]
pub struct PgEdgeStore {
    pool: PgPool,
}

impl PgEdgeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EdgeStore for PgEdgeStore {
    async fn find_edge(&self, pair: &CanonicalPair) -> StoreResult<Option<FriendEdge>> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>)>(
            r#"
            SELECT lower_user_id, higher_user_id, created_at
            FROM friend_edges
            WHERE lower_user_id = $1 AND higher_user_id = $2
            "#,
        )
        .bind(pair.lower())
        .bind(pair.higher())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(lower_user_id, higher_user_id, created_at)| FriendEdge {
            lower_user_id,
            higher_user_id,
            created_at,
        }))
    }

    async fn insert_edge(&self, edge: &FriendEdge) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO friend_edges (lower_user_id, higher_user_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(edge.lower_user_id)
        .bind(edge.higher_user_id)
        .bind(edge.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_edge(&self, pair: &CanonicalPair) -> StoreResult<bool> {
        let result = sqlx::query(
            "DELETE FROM friend_edges WHERE lower_user_id = $1 AND higher_user_id = $2",
        )
        .bind(pair.lower())
        .bind(pair.higher())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    fn neighbours(&self, user: Uuid) -> BoxStream<'_, StoreResult<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT CASE WHEN lower_user_id = $1 THEN higher_user_id ELSE lower_user_id END
            FROM friend_edges
            WHERE lower_user_id = $1 OR higher_user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user)
        .fetch(&self.pool)
        .map_err(StoreError::from)
        .boxed()
    }
}
