//! Letter Data Structures
//!
//! Represents a private letter a user writes, plus the request and response
//! bodies of the letter endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of letters per page
pub const DEFAULT_LETTER_PAGE_SIZE: u32 = 4;

/// A stored letter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Letter {
    /// Unique letter ID
    pub id: Uuid,
    /// Author of the letter
    pub user_id: Uuid,
    /// Letter body
    pub content: String,
    /// When the letter was written
    pub created_at: DateTime<Utc>,
}

impl Letter {
    pub fn new(user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Request to write a letter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLetterRequest {
    pub content: String,
}

/// Response after writing a letter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLetterResponse {
    pub letter_id: Uuid,
}

/// One page of the caller's letters, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLettersResponse {
    pub letters: Vec<Letter>,
    pub page: u32,
    pub size: u32,
    pub has_more: bool,
}

/// Page/size query parameters shared by paged endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    /// Upper bound on a page size
    pub const MAX_SIZE: u32 = 100;

    /// Resolve to `(page, size)`, clamping size into `1..=MAX_SIZE`
    pub fn resolve(&self, default_size: u32) -> (u32, u32) {
        let page = self.page.unwrap_or(0);
        let size = self.size.unwrap_or(default_size).clamp(1, Self::MAX_SIZE);
        (page, size)
    }

    /// SQL `LIMIT`/`OFFSET` for the resolved page
    pub fn limit_offset(&self, default_size: u32) -> (i64, i64) {
        let (page, size) = self.resolve(default_size);
        (i64::from(size), i64::from(page) * i64::from(size))
    }
}
