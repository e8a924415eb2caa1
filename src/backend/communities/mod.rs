//! Communities Module
//!
//! Owned groups users can join: storage and HTTP handlers.

pub mod db;
pub mod handlers;

pub use db::{CommunityStore, MemoryCommunityStore, PgCommunityStore};
pub use handlers::{
    create_community, delete_community, get_community, join_community, update_community,
};
