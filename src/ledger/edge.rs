//! Friend edge data structures
//!
//! A friendship is an undirected edge between two users. It is stored once,
//! under a canonical ordering of its endpoints, so `(a, b)` and `(b, a)`
//! always resolve to the same record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An unordered pair of distinct user identities in canonical order
///
/// The only constructor, [`CanonicalPair::new`], rejects equal identities and
/// places the smaller one first, so every value satisfies `lower < higher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPair {
    lower: Uuid,
    higher: Uuid,
}

impl CanonicalPair {
    /// Canonicalize two identities; `None` when they are the same user
    pub fn new(a: Uuid, b: Uuid) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lower: a, higher: b }),
            std::cmp::Ordering::Greater => Some(Self { lower: b, higher: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn lower(&self) -> Uuid {
        self.lower
    }

    pub fn higher(&self) -> Uuid {
        self.higher
    }

    /// The endpoint opposite `user`, if `user` is an endpoint
    pub fn other(&self, user: Uuid) -> Option<Uuid> {
        if self.lower == user {
            Some(self.higher)
        } else if self.higher == user {
            Some(self.lower)
        } else {
            None
        }
    }
}

/// A persisted friendship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEdge {
    /// Endpoint with the smaller identity
    pub lower_user_id: Uuid,
    /// Endpoint with the larger identity
    pub higher_user_id: Uuid,
    /// When the friendship was created
    pub created_at: DateTime<Utc>,
}

impl FriendEdge {
    pub fn new(pair: CanonicalPair, created_at: DateTime<Utc>) -> Self {
        Self {
            lower_user_id: pair.lower(),
            higher_user_id: pair.higher(),
            created_at,
        }
    }

    /// The canonical key of this edge
    pub fn pair(&self) -> CanonicalPair {
        CanonicalPair {
            lower: self.lower_user_id,
            higher: self.higher_user_id,
        }
    }
}
