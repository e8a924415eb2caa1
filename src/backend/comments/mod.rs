//! Comments Module
//!
//! Comments on articles: storage and HTTP handlers.

pub mod db;
pub mod handlers;

pub use db::{CommentStore, MemoryCommentStore, PgCommentStore};
pub use handlers::{create_comment, delete_comment, list_comments, update_comment};
