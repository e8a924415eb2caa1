//! Relationships Module
//!
//! HTTP handlers for the friend endpoints and the Postgres edge store
//! behind the relationship ledger.

pub mod db;
pub mod handlers;

pub use db::PgEdgeStore;
pub use handlers::{add_friend, friendship_status, list_friends, remove_friend};
