//! Shared Module
//!
//! Types shared between the storage layer and the HTTP handlers: error types
//! and the JSON request/response bodies of every endpoint.

/// Shared error types
pub mod error;

/// Article types
pub mod articles;

/// Comment types
pub mod comments;

/// Community types
pub mod communities;

/// Friend endpoint types
pub mod friends;

/// Letter types
pub mod letters;

pub use error::{SharedError, StoreError, StoreResult};
pub use articles::Article;
pub use comments::Comment;
pub use communities::Community;
pub use letters::{Letter, PageParams};
