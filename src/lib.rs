//! A height-balanced binary search tree (AVL) over signed integer keys.
//!
//! Nodes carry a cached height and a lookup-only parent back-reference and
//! live in an arena indexed by `NodeId`, so the cyclic parent/child graph
//! needs no reference counting and teardown is just dropping the arena.
//! Insertion and deletion relink the affected nodes, refresh ancestor
//! heights (stopping early once a height stabilizes), and restore balance
//! with single or double rotations while walking the ancestor chain, which
//! keeps every node's balance factor in `{-1, 0, 1}` and the tree height
//! at O(log n).
//!
//! # Examples
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.extend([50, 30, 20, 10, 15, 25]).unwrap();
//!
//! let keys: Vec<_> = tree.keys().collect();
//! assert_eq!(keys, [10, 15, 20, 25, 30, 50]);
//!
//! tree.delete(30).unwrap();
//! assert!(!tree.contains(30));
//! assert!(tree.check_invariants());
//! ```

mod arena;
mod balance;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod rotation;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats};
pub use error::{AvlResult, AvlTreeError, KeyResult, ModifyResult};
pub use iteration::{InOrderIter, PostOrderIter, PreOrderIter};
pub use types::{AvlNode, AvlTree, Key, NodeId, NULL_NODE};

impl AvlTree {
    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Height of the tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> i32 {
        self.node_height(self.root)
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        if self.root == NULL_NODE {
            None
        } else {
            Some(self.root)
        }
    }

    /// Arena statistics (live nodes, free slots).
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_tracks_inserts_and_deletes() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.len(), 0);
        tree.extend([3, 1, 4, 1, 5]).unwrap();
        assert_eq!(tree.len(), 5);
        tree.delete(4).unwrap();
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn height_matches_structure() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.height(), -1);
        tree.insert(1).unwrap();
        assert_eq!(tree.height(), 0);
        tree.insert(2).unwrap();
        assert_eq!(tree.height(), 1);
        tree.insert(3).unwrap();
        // The rotation keeps three nodes at height 1.
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn arena_slots_are_recycled() {
        let mut tree = AvlTree::new();
        tree.extend(0..8).unwrap();
        for key in 0..4 {
            tree.delete(key).unwrap();
        }
        let stats = tree.arena_stats();
        assert_eq!(stats.allocated_count, 4);
        assert_eq!(stats.free_count, 4);

        tree.extend(100..104).unwrap();
        assert_eq!(tree.arena_stats().free_count, 0);
        assert!(tree.check_invariants());
    }
}
