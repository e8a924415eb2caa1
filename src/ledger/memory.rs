//! In-memory edge store for tests and database-less development

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::ledger::edge::{CanonicalPair, FriendEdge};
use crate::ledger::store::EdgeStore;
use crate::shared::error::{StoreError, StoreResult};

/// Edge table held behind a single `RwLock`
///
/// The write guard makes check-and-insert atomic, which gives the same
/// guarantee as the primary key on the Postgres table.
#[derive(Clone, Default)]
pub struct MemoryEdgeStore {
    data: Arc<RwLock<EdgeTable>>,
}

#[derive(Default)]
struct EdgeTable {
    /// Edges keyed by canonical pair, tagged with an insertion sequence number
    edges: HashMap<CanonicalPair, (u64, FriendEdge)>,
    next_seq: u64,
}

impl MemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored edges
    pub async fn len(&self) -> usize {
        self.data.read().await.edges.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EdgeStore for MemoryEdgeStore {
    async fn find_edge(&self, pair: &CanonicalPair) -> StoreResult<Option<FriendEdge>> {
        let table = self.data.read().await;
        Ok(table.edges.get(pair).map(|(_, edge)| edge.clone()))
    }

    async fn insert_edge(&self, edge: &FriendEdge) -> StoreResult<()> {
        let mut table = self.data.write().await;
        let pair = edge.pair();
        if table.edges.contains_key(&pair) {
            return Err(StoreError::Conflict("friend_edges_pkey".to_string()));
        }
        let seq = table.next_seq;
        table.next_seq += 1;
        table.edges.insert(pair, (seq, edge.clone()));
        Ok(())
    }

    async fn delete_edge(&self, pair: &CanonicalPair) -> StoreResult<bool> {
        let mut table = self.data.write().await;
        Ok(table.edges.remove(pair).is_some())
    }

    fn neighbours(&self, user: Uuid) -> BoxStream<'_, StoreResult<Uuid>> {
        stream::once(async move {
            let table = self.data.read().await;
            let mut matched: Vec<(u64, Uuid)> = table
                .edges
                .iter()
                .filter_map(|(pair, (seq, _))| pair.other(user).map(|friend| (*seq, friend)))
                .collect();
            matched.sort_by_key(|(seq, _)| *seq);
            stream::iter(matched.into_iter().map(|(_, friend)| Ok::<_, StoreError>(friend)))
        })
        .flatten()
        .boxed()
    }
}
