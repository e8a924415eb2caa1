//! Edge storage abstraction
//!
//! Every operation is keyed by a [`CanonicalPair`]; backends never see an
//! unnormalized pair.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use uuid::Uuid;

use crate::ledger::edge::{CanonicalPair, FriendEdge};
use crate::shared::error::StoreResult;

/// Persistent table of friend edges
#[async_trait]
pub trait EdgeStore: Send + Sync {
    /// Look up the edge stored under `pair`
    async fn find_edge(&self, pair: &CanonicalPair) -> StoreResult<Option<FriendEdge>>;

    /// Insert `edge` as a single atomic write
    ///
    /// Must fail with `StoreError::Conflict` when an edge with the same
    /// canonical pair already exists, including one inserted concurrently.
    async fn insert_edge(&self, edge: &FriendEdge) -> StoreResult<()>;

    /// Remove the edge stored under `pair`; returns whether one existed
    async fn delete_edge(&self, pair: &CanonicalPair) -> StoreResult<bool>;

    /// Stream the identities connected to `user` through either column,
    /// in creation order
    fn neighbours(&self, user: Uuid) -> BoxStream<'_, StoreResult<Uuid>>;
}
