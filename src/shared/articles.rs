//! Article Data Structures
//!
//! An article is a memory a user shares about their pet. Unlike letters,
//! articles are readable by every signed-in user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of articles per page
pub const DEFAULT_ARTICLE_PAGE_SIZE: u32 = 10;

/// Longest accepted article title
pub const MAX_ARTICLE_TITLE_LEN: usize = 100;

/// A stored article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Article {
    pub id: Uuid,
    /// Author of the article
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(user_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of create and edit requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
}

/// Response after creating an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleResponse {
    pub article_id: Uuid,
}

/// One page of a user's articles, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListArticlesResponse {
    pub articles: Vec<Article>,
    pub page: u32,
    pub size: u32,
    pub has_more: bool,
}
