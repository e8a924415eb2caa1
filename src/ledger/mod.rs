//! Relationship Ledger
//!
//! Maintains the undirected friendship graph. Each unordered pair of users is
//! stored as exactly one [`FriendEdge`] under its [`CanonicalPair`], so the
//! ledger has to normalize every pair before it reaches the store; a lookup
//! with the endpoints swapped would otherwise miss an existing edge.
//!
//! # Module Structure
//!
//! ```text
//! ledger/
//! ├── mod.rs     - RelationshipLedger and LedgerError
//! ├── edge.rs    - CanonicalPair and FriendEdge
//! ├── store.rs   - EdgeStore trait
//! └── memory.rs  - In-memory EdgeStore
//! ```
//!
//! The Postgres store lives in `backend::relationships::db`.
//!
//! # Concurrency
//!
//! The ledger holds no state of its own. Two concurrent proposals for the
//! same pair can both pass the existence check; the store's atomic
//! uniqueness rule then rejects the second insert, which the ledger reports
//! as [`LedgerError::StoreConflict`].

pub mod edge;
pub mod memory;
pub mod store;

use std::sync::Arc;

use chrono::Utc;
use futures_util::stream::{BoxStream, StreamExt};
use thiserror::Error;
use uuid::Uuid;

pub use edge::{CanonicalPair, FriendEdge};
pub use memory::MemoryEdgeStore;
pub use store::EdgeStore;

use crate::shared::error::StoreError;

/// Business-rule failures of the ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A user tried to befriend themselves
    #[error("User {0} cannot befriend themselves")]
    SelfRelationship(Uuid),

    /// The canonical edge already exists
    #[error("Users {lower} and {higher} are already friends")]
    DuplicateRelationship { lower: Uuid, higher: Uuid },

    /// The store rejected the insert because the edge appeared concurrently
    #[error("Concurrent write conflict for users {lower} and {higher}")]
    StoreConflict { lower: Uuid, higher: Uuid },

    /// No edge exists for the pair
    #[error("Users {lower} and {higher} are not friends")]
    RelationshipNotFound { lower: Uuid, higher: Uuid },

    /// Underlying storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Whether the caller should report this as "already friends"
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRelationship { .. } | Self::StoreConflict { .. }
        )
    }
}

/// Friendship graph over user identities
///
/// Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct RelationshipLedger {
    store: Arc<dyn EdgeStore>,
}

impl RelationshipLedger {
    pub fn new(store: Arc<dyn EdgeStore>) -> Self {
        Self { store }
    }

    /// Create the friendship between `requester` and `target`
    ///
    /// Both identities must already be known to exist. Fails with
    /// `SelfRelationship` without touching storage when they are equal, and
    /// with `DuplicateRelationship` when the pair is already connected in
    /// either direction.
    pub async fn propose_friendship(
        &self,
        requester: Uuid,
        target: Uuid,
    ) -> Result<FriendEdge, LedgerError> {
        let pair =
            CanonicalPair::new(requester, target).ok_or(LedgerError::SelfRelationship(requester))?;

        if self.store.find_edge(&pair).await?.is_some() {
            tracing::debug!(
                lower = %pair.lower(),
                higher = %pair.higher(),
                "friendship already exists"
            );
            return Err(LedgerError::DuplicateRelationship {
                lower: pair.lower(),
                higher: pair.higher(),
            });
        }

        let edge = FriendEdge::new(pair, Utc::now());
        match self.store.insert_edge(&edge).await {
            Ok(()) => {
                tracing::info!(
                    lower = %edge.lower_user_id,
                    higher = %edge.higher_user_id,
                    "friendship created"
                );
                Ok(edge)
            }
            Err(StoreError::Conflict(constraint)) => {
                tracing::warn!(
                    lower = %pair.lower(),
                    higher = %pair.higher(),
                    constraint = %constraint,
                    "friendship insert lost a concurrent race"
                );
                Err(LedgerError::StoreConflict {
                    lower: pair.lower(),
                    higher: pair.higher(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Whether `a` and `b` are friends, in either order
    pub async fn edge_exists(&self, a: Uuid, b: Uuid) -> Result<bool, LedgerError> {
        let Some(pair) = CanonicalPair::new(a, b) else {
            return Ok(false);
        };
        Ok(self.store.find_edge(&pair).await?.is_some())
    }

    /// Lazily stream the identities of everyone connected to `user`
    pub fn list_friends(&self, user: Uuid) -> BoxStream<'_, Result<Uuid, LedgerError>> {
        self.store
            .neighbours(user)
            .map(|item| item.map_err(LedgerError::from))
            .boxed()
    }

    /// Remove the friendship between `a` and `b`
    pub async fn dissolve_friendship(&self, a: Uuid, b: Uuid) -> Result<(), LedgerError> {
        let pair = CanonicalPair::new(a, b).ok_or(LedgerError::SelfRelationship(a))?;
        if self.store.delete_edge(&pair).await? {
            tracing::info!(lower = %pair.lower(), higher = %pair.higher(), "friendship removed");
            Ok(())
        } else {
            Err(LedgerError::RelationshipNotFound {
                lower: pair.lower(),
                higher: pair.higher(),
            })
        }
    }
}
