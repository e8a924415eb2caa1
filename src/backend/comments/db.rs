//! Database operations for comments
//!
//! The `CommentStore` trait with a Postgres implementation and an in-memory
//! one. An article's comments are always listed newest first.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::comments::Comment;
use crate::shared::error::StoreResult;

/// Persistence of article comments
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn create_comment(&self, comment: &Comment) -> StoreResult<()>;

    async fn find_comment(&self, comment_id: Uuid) -> StoreResult<Option<Comment>>;

    /// Comments on one article, newest first
    async fn list_for_article(&self, article_id: Uuid) -> StoreResult<Vec<Comment>>;

    /// Replace the content; `None` when the comment does not exist
    async fn update_comment(&self, comment_id: Uuid, content: &str) -> StoreResult<Option<Comment>>;

    /// Returns whether a comment was removed
    async fn delete_comment(&self, comment_id: Uuid) -> StoreResult<bool>;

    /// Remove every comment on an article
    async fn delete_for_article(&self, article_id: Uuid) -> StoreResult<u64>;
}

/// Postgres-backed comment store
#[derive(Clone)]
pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn create_comment(&self, comment: &Comment) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, article_id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id)
        .bind(comment.article_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_comment(&self, comment_id: Uuid) -> StoreResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, article_id, user_id, content, created_at FROM comments WHERE id = $1",
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list_for_article(&self, article_id: Uuid) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, article_id, user_id, content, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn update_comment(&self, comment_id: Uuid, content: &str) -> StoreResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = $2
            WHERE id = $1
            RETURNING id, article_id, user_id, content, created_at
            "#,
        )
        .bind(comment_id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_article(&self, article_id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// In-memory comment store
#[derive(Clone, Default)]
pub struct MemoryCommentStore {
    comments: Arc<RwLock<HashMap<Uuid, (u64, Comment)>>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create_comment(&self, comment: &Comment) -> StoreResult<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.comments.write().await.insert(comment.id, (seq, comment.clone()));
        Ok(())
    }

    async fn find_comment(&self, comment_id: Uuid) -> StoreResult<Option<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments.get(&comment_id).map(|(_, comment)| comment.clone()))
    }

    async fn list_for_article(&self, article_id: Uuid) -> StoreResult<Vec<Comment>> {
        let comments = self.comments.read().await;
        let mut found: Vec<&(u64, Comment)> = comments
            .values()
            .filter(|(_, comment)| comment.article_id == article_id)
            .collect();
        found.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at.cmp(&a.created_at).then(b_seq.cmp(a_seq))
        });

        Ok(found.into_iter().map(|(_, comment)| comment.clone()).collect())
    }

    async fn update_comment(&self, comment_id: Uuid, content: &str) -> StoreResult<Option<Comment>> {
        let mut comments = self.comments.write().await;
        Ok(comments.get_mut(&comment_id).map(|(_, comment)| {
            comment.content = content.to_string();
            comment.clone()
        }))
    }

    async fn delete_comment(&self, comment_id: Uuid) -> StoreResult<bool> {
        Ok(self.comments.write().await.remove(&comment_id).is_some())
    }

    async fn delete_for_article(&self, article_id: Uuid) -> StoreResult<u64> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|_, (_, comment)| comment.article_id != article_id);
        Ok((before - comments.len()) as u64)
    }
}
