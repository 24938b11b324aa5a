//! Property tests: the structural invariants must survive arbitrary
//! insert and delete sequences.

use avltree::{AvlTree, AvlTreeError, Key};
use proptest::prelude::*;

fn in_order(tree: &AvlTree) -> Vec<Key> {
    tree.keys().collect()
}

/// A key multiset plus a permutation of its indices giving the delete order.
fn delete_plan() -> impl Strategy<Value = (Vec<Key>, Vec<usize>)> {
    prop::collection::vec(-500i64..500, 1..100).prop_flat_map(|keys| {
        let order: Vec<usize> = (0..keys.len()).collect();
        (Just(keys), Just(order).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(keys in prop::collection::vec(-1000i64..1000, 0..150)) {
        let mut tree = AvlTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
            prop_assert!(tree.check_invariants(), "after inserting {}: {:?}", key, tree.validate());
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(in_order(&tree), expected);
    }

    #[test]
    fn invariants_hold_after_every_delete((keys, order) in delete_plan()) {
        let mut tree = AvlTree::new();
        tree.extend(keys.iter().copied()).unwrap();

        let mut expected = keys.clone();
        expected.sort_unstable();

        for &idx in &order {
            let key = keys[idx];
            tree.delete(key).unwrap();
            let pos = expected.binary_search(&key).unwrap();
            expected.remove(pos);

            prop_assert!(tree.check_invariants(), "after deleting {}: {:?}", key, tree.validate());
            prop_assert!(!tree.contains(key) || expected.contains(&key));
            prop_assert_eq!(in_order(&tree), expected.clone());
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn delete_miss_is_idempotent(
        keys in prop::collection::vec(0i64..100, 0..80),
        probe in 1000i64..2000,
    ) {
        let mut tree = AvlTree::new();
        tree.extend(keys).unwrap();
        let before: Vec<_> = tree.iter_in_order().collect();

        prop_assert_eq!(tree.delete(probe), Err(AvlTreeError::KeyNotFound));

        let after: Vec<_> = tree.iter_in_order().collect();
        prop_assert_eq!(before, after);
        prop_assert!(tree.check_invariants());
    }

    #[test]
    fn insert_then_delete_round_trips(
        keys in prop::collection::vec(-100i64..100, 0..80),
        extra in -100i64..100,
    ) {
        let mut tree = AvlTree::new();
        tree.extend(keys).unwrap();
        let before = in_order(&tree);

        tree.insert(extra).unwrap();
        tree.delete(extra).unwrap();

        // The shape may differ, the key multiset must not.
        prop_assert_eq!(in_order(&tree), before);
        prop_assert!(tree.check_invariants());
    }

    #[test]
    fn traversals_yield_consistent_heights(keys in prop::collection::vec(-200i64..200, 0..120)) {
        let mut tree = AvlTree::new();
        tree.extend(keys).unwrap();

        // Each traversal reports the same (key, height) multiset, and every
        // reported height is the one cached on the searched node.
        let mut a: Vec<_> = tree.iter_in_order().collect();
        let mut b: Vec<_> = tree.iter_pre_order().collect();
        let mut c: Vec<_> = tree.iter_post_order().collect();
        a.sort_unstable();
        b.sort_unstable();
        c.sort_unstable();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);

        for &(key, height) in &a {
            prop_assert!(height >= 0);
            let node = tree.search(key).unwrap();
            prop_assert!(tree.get_height(node).is_some());
            prop_assert_eq!(tree.get_key(node), Some(key));
        }
    }
}
