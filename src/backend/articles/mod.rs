//! Articles Module
//!
//! Shared memories: storage and HTTP handlers.

pub mod db;
pub mod handlers;

pub use db::{ArticleStore, MemoryArticleStore, PgArticleStore};
pub use handlers::{create_article, delete_article, get_article, list_user_articles, update_article};
