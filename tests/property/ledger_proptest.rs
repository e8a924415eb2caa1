//! Property-based tests for the relationship ledger
//!
//! Uses proptest to generate identities and friendship sets and checks the
//! ordering, rejection and visibility rules on the in-memory store.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use futures_util::TryStreamExt;
use proptest::prelude::*;
use uuid::Uuid;

use tostar::ledger::{CanonicalPair, LedgerError, MemoryEdgeStore, RelationshipLedger};

fn identity() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn ledger() -> (RelationshipLedger, MemoryEdgeStore) {
    let store = MemoryEdgeStore::new();
    (RelationshipLedger::new(Arc::new(store.clone())), store)
}

proptest! {
    #[test]
    fn test_canonical_pair_ignores_argument_order(x in identity(), y in identity()) {
        prop_assume!(x != y);
        let forward = CanonicalPair::new(x, y).unwrap();
        let backward = CanonicalPair::new(y, x).unwrap();

        prop_assert_eq!(forward, backward);
        prop_assert!(forward.lower() < forward.higher());
        prop_assert_eq!(forward.lower(), x.min(y));
    }

    #[test]
    fn test_proposal_stores_min_then_max(x in identity(), y in identity()) {
        prop_assume!(x != y);
        let (ledger, _) = ledger();
        let edge = runtime().block_on(ledger.propose_friendship(x, y)).unwrap();

        prop_assert_eq!(edge.lower_user_id, x.min(y));
        prop_assert_eq!(edge.higher_user_id, x.max(y));
    }

    #[test]
    fn test_second_proposal_is_rejected_either_direction(x in identity(), y in identity()) {
        prop_assume!(x != y);
        let (ledger, store) = ledger();
        let (same, reversed, stored) = runtime().block_on(async {
            ledger.propose_friendship(x, y).await.unwrap();
            let same = ledger.propose_friendship(x, y).await;
            let reversed = ledger.propose_friendship(y, x).await;
            (same, reversed, store.len().await)
        });

        prop_assert!(
            matches!(same, Err(LedgerError::DuplicateRelationship { .. })),
            "repeated proposal returned {:?}",
            same
        );
        prop_assert!(
            matches!(reversed, Err(LedgerError::DuplicateRelationship { .. })),
            "reversed proposal returned {:?}",
            reversed
        );
        prop_assert_eq!(stored, 1);
    }

    #[test]
    fn test_self_friendship_always_fails(x in identity()) {
        let (ledger, store) = ledger();
        let (result, exists, empty) = runtime().block_on(async {
            let result = ledger.propose_friendship(x, x).await;
            let exists = ledger.edge_exists(x, x).await.unwrap();
            (result, exists, store.is_empty().await)
        });

        prop_assert!(
            matches!(result, Err(LedgerError::SelfRelationship(id)) if id == x),
            "self proposal returned {:?}",
            result
        );
        prop_assert!(!exists);
        prop_assert!(empty);
    }

    #[test]
    fn test_friendships_are_visible_from_both_sides(
        pairs in prop::collection::vec((0u128..8, 0u128..8), 0..20)
    ) {
        let (ledger, _) = ledger();
        let rt = runtime();

        let mut expected: BTreeSet<(u128, u128)> = BTreeSet::new();
        for (a, b) in &pairs {
            let result = rt.block_on(ledger.propose_friendship(Uuid::from_u128(*a), Uuid::from_u128(*b)));
            if a == b {
                prop_assert!(result.is_err());
            } else {
                let fresh = expected.insert(((*a).min(*b), (*a).max(*b)));
                prop_assert_eq!(result.is_ok(), fresh);
            }
        }

        for user in 0u128..8 {
            let friends: HashSet<Uuid> = rt
                .block_on(ledger.list_friends(Uuid::from_u128(user)).try_collect::<Vec<_>>())
                .unwrap()
                .into_iter()
                .collect();

            for other in 0u128..8 {
                let connected = expected.contains(&(user.min(other), user.max(other)));
                let exists = rt
                    .block_on(ledger.edge_exists(Uuid::from_u128(user), Uuid::from_u128(other)))
                    .unwrap();
                prop_assert_eq!(exists, connected);
                prop_assert_eq!(friends.contains(&Uuid::from_u128(other)), connected);
            }
        }
    }
}
