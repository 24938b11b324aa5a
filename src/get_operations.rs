//! Read operations for AvlTree.
//!
//! This module contains key lookup and node inspection, plus the internal
//! link accessors shared by the mutation modules. The accessors are total:
//! reading through the null sentinel yields a neutral value and writing
//! through it is a no-op, so callers never branch on slot validity.

use crate::error::{AvlTreeError, KeyResult};
use crate::types::{AvlTree, Key, NodeId, NULL_NODE};
use std::cmp::Ordering;

impl AvlTree {
    // ========================================================================
    // PUBLIC LOOKUP OPERATIONS
    // ========================================================================

    /// Finds the node holding `key`.
    ///
    /// Standard iterative BST descent; with duplicate keys the topmost
    /// match is returned. Read-only: a miss mutates nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(7).unwrap();
    /// let node = tree.search(7).unwrap();
    /// assert_eq!(tree.get_key(node), Some(7));
    /// assert_eq!(tree.search(8), None);
    /// ```
    pub fn search(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(node) = self.arena.get(current) {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Like [`AvlTree::search`], reporting a miss as `KeyNotFound`.
    pub fn try_search(&self, key: Key) -> KeyResult<NodeId> {
        self.search(key).ok_or(AvlTreeError::KeyNotFound)
    }

    /// Check if `key` exists in the tree.
    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<Key> {
        self.get_key(self.min_node_in(self.root))
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<Key> {
        let mut current = self.root;
        let mut last = NULL_NODE;
        while let Some(node) = self.arena.get(current) {
            last = current;
            current = node.right;
        }
        self.get_key(last)
    }

    // ========================================================================
    // NODE INSPECTION
    // ========================================================================

    /// Key of the node `id`, if it is live.
    pub fn get_key(&self, id: NodeId) -> Option<Key> {
        self.arena.get(id).map(|node| node.key)
    }

    /// Cached height of the node `id`, if it is live.
    pub fn get_height(&self, id: NodeId) -> Option<i32> {
        self.arena.get(id).map(|node| node.height)
    }

    // ========================================================================
    // INTERNAL LINK ACCESSORS
    // ========================================================================

    /// Leftmost node of the subtree rooted at `subtree` (the in-order
    /// minimum), or `NULL_NODE` for an empty subtree.
    pub(crate) fn min_node_in(&self, subtree: NodeId) -> NodeId {
        let mut current = subtree;
        let mut last = NULL_NODE;
        while let Some(node) = self.arena.get(current) {
            last = current;
            current = node.left;
        }
        last
    }

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.right)
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.parent)
    }

    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        if let Some(node) = self.arena.get_mut(id) {
            node.left = child;
        }
    }

    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        if let Some(node) = self.arena.get_mut(id) {
            node.right = child;
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.arena.get_mut(id) {
            node.parent = parent;
        }
    }

    /// Points `parent`'s child slot holding `old` at `new` instead; updates
    /// the root when `parent` is the null sentinel.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.root = new;
        } else if self.left_of(parent) == old {
            self.set_left(parent, new);
        } else {
            self.set_right(parent, new);
        }
    }
}
