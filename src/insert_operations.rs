//! Insert operations for AvlTree.
//!
//! Insertion descends iteratively from the root to an absent child slot,
//! links the new leaf there, then refreshes ancestor heights and runs the
//! rebalance walk from the new leaf's parent.

use crate::error::ModifyResult;
use crate::types::{AvlNode, AvlTree, Key, NULL_NODE};

impl AvlTree {
    /// Inserts `key` into the tree.
    ///
    /// Duplicates are permitted and placed in the right subtree (`key <
    /// node.key` goes left, otherwise right). The only failure is
    /// allocation, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(50).unwrap();
    /// tree.insert(30).unwrap();
    /// tree.insert(70).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.contains(30));
    /// ```
    pub fn insert(&mut self, key: Key) -> ModifyResult<()> {
        // Descend to the insertion point, remembering the last node seen
        // and which of its child slots the new key belongs in.
        let mut parent = NULL_NODE;
        let mut goes_left = false;
        let mut current = self.root;
        while let Some(node) = self.arena.get(current) {
            parent = current;
            if key < node.key {
                goes_left = true;
                current = node.left;
            } else {
                goes_left = false;
                current = node.right;
            }
        }

        // Allocation happens before any link is touched, so a failure
        // leaves the tree in its prior state.
        let id = self.arena.allocate(AvlNode::leaf(key, parent))?;

        if parent == NULL_NODE {
            self.root = id;
        } else if goes_left {
            self.set_left(parent, id);
        } else {
            self.set_right(parent, id);
        }
        self.len += 1;

        self.propagate_heights(parent);
        self.rebalance_from(parent);
        Ok(())
    }

    /// Inserts every key yielded by `keys`, in order.
    pub fn extend<I>(&mut self, keys: I) -> ModifyResult<()>
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.insert(key)?;
        }
        Ok(())
    }
}
