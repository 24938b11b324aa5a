//! Construction and teardown for AvlTree.
//!
//! Creating a tree never allocates a node; the first insertion does. The
//! expected node count can be passed up front to size the arena, replacing
//! any notion of global size state with an explicit construction argument.

use crate::arena::Arena;
use crate::types::{AvlTree, NULL_NODE};

impl AvlTree {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            arena: Arena::new(),
        }
    }

    /// Creates an empty tree with arena capacity for `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::with_capacity(128);
    /// tree.extend(0..100).unwrap();
    /// assert_eq!(tree.len(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            arena: Arena::with_capacity(capacity),
        }
    }

    /// Removes every node from the tree.
    ///
    /// Teardown drops the arena storage wholesale; no per-node traversal
    /// or recursive release is involved.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }
}

impl Default for AvlTree {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}
