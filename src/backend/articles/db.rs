//! Database operations for articles
//!
//! The `ArticleStore` trait with a Postgres implementation and an in-memory
//! one. Listing is always newest first.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::articles::Article;
use crate::shared::error::StoreResult;

/// Persistence of articles
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn create_article(&self, article: &Article) -> StoreResult<()>;

    async fn find_article(&self, article_id: Uuid) -> StoreResult<Option<Article>>;

    /// Replace title and content; `None` when the article does not exist
    async fn update_article(
        &self,
        article_id: Uuid,
        title: &str,
        content: &str,
    ) -> StoreResult<Option<Article>>;

    /// Returns whether an article was removed
    async fn delete_article(&self, article_id: Uuid) -> StoreResult<bool>;

    /// The author's articles, newest first
    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Article>>;
}

const ARTICLE_COLUMNS: &str = "id, user_id, title, content, created_at, updated_at";

/// Postgres-backed article store
#[derive(Clone)]
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn create_article(&self, article: &Article) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (id, user_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(article.id)
        .bind(article.user_id)
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_article(&self, article_id: Uuid) -> StoreResult<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM articles WHERE id = $1",
            ARTICLE_COLUMNS
        ))
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    async fn update_article(
        &self,
        article_id: Uuid,
        title: &str,
        content: &str,
    ) -> StoreResult<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(&format!(
            r#"
            UPDATE articles
            SET title = $2, content = $3, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(article_id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    async fn delete_article(&self, article_id: Uuid) -> StoreResult<bool> {
        // comments go with the article through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Article>> {
        let articles = sqlx::query_as::<_, Article>(&format!(
            r#"
            SELECT {}
            FROM articles
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }
}

/// In-memory article store
#[derive(Clone, Default)]
pub struct MemoryArticleStore {
    articles: Arc<RwLock<HashMap<Uuid, (u64, Article)>>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn create_article(&self, article: &Article) -> StoreResult<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.articles.write().await.insert(article.id, (seq, article.clone()));
        Ok(())
    }

    async fn find_article(&self, article_id: Uuid) -> StoreResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.get(&article_id).map(|(_, article)| article.clone()))
    }

    async fn update_article(
        &self,
        article_id: Uuid,
        title: &str,
        content: &str,
    ) -> StoreResult<Option<Article>> {
        let mut articles = self.articles.write().await;
        Ok(articles.get_mut(&article_id).map(|(_, article)| {
            article.title = title.to_string();
            article.content = content.to_string();
            article.updated_at = Utc::now();
            article.clone()
        }))
    }

    async fn delete_article(&self, article_id: Uuid) -> StoreResult<bool> {
        Ok(self.articles.write().await.remove(&article_id).is_some())
    }

    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Article>> {
        let articles = self.articles.read().await;
        let mut owned: Vec<&(u64, Article)> = articles
            .values()
            .filter(|(_, article)| article.user_id == user_id)
            .collect();
        owned.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at.cmp(&a.created_at).then(b_seq.cmp(a_seq))
        });

        Ok(owned
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|(_, article)| article.clone())
            .collect())
    }
}
