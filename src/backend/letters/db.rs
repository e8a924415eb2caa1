//! Database operations for letters
//!
//! The `LetterStore` trait with a Postgres implementation and an in-memory
//! one. Listing is always newest first.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::error::StoreResult;
use crate::shared::letters::Letter;

/// Persistence of private letters
#[async_trait]
pub trait LetterStore: Send + Sync {
    async fn create_letter(&self, letter: &Letter) -> StoreResult<()>;

    /// The author's letters, newest first
    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Letter>>;

    async fn find_letter(&self, letter_id: Uuid) -> StoreResult<Option<Letter>>;
}

/// Postgres-backed letter store
#[derive(Clone)]
pub struct PgLetterStore {
    pool: PgPool,
}

impl PgLetterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LetterStore for PgLetterStore {
    async fn create_letter(&self, letter: &Letter) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO letters (id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(letter.id)
        .bind(letter.user_id)
        .bind(&letter.content)
        .bind(letter.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Letter>> {
        let letters = sqlx::query_as::<_, Letter>(
            r#"
            SELECT id, user_id, content, created_at
            FROM letters
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(letters)
    }

    async fn find_letter(&self, letter_id: Uuid) -> StoreResult<Option<Letter>> {
        let letter = sqlx::query_as::<_, Letter>(
            "SELECT id, user_id, content, created_at FROM letters WHERE id = $1",
        )
        .bind(letter_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(letter)
    }
}

/// In-memory letter store
#[derive(Clone, Default)]
pub struct MemoryLetterStore {
    letters: Arc<RwLock<HashMap<Uuid, (u64, Letter)>>>,
}

impl MemoryLetterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LetterStore for MemoryLetterStore {
    async fn create_letter(&self, letter: &Letter) -> StoreResult<()> {
        let mut letters = self.letters.write().await;
        let seq = letters.len() as u64;
        letters.insert(letter.id, (seq, letter.clone()));
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> StoreResult<Vec<Letter>> {
        let letters = self.letters.read().await;
        let mut owned: Vec<&(u64, Letter)> = letters
            .values()
            .filter(|(_, letter)| letter.user_id == user_id)
            .collect();
        owned.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at.cmp(&a.created_at).then(b_seq.cmp(a_seq))
        });

        Ok(owned
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|(_, letter)| letter.clone())
            .collect())
    }

    async fn find_letter(&self, letter_id: Uuid) -> StoreResult<Option<Letter>> {
        let letters = self.letters.read().await;
        Ok(letters.get(&letter_id).map(|(_, letter)| letter.clone()))
    }
}
