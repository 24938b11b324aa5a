//! Delete operations for AvlTree.
//!
//! Removal classifies the target by child count: a leaf unlinks, a
//! one-child node splices its child up, and a two-children node takes its
//! in-order successor's key and removes the successor instead (which has at
//! most a right child, so it lands in one of the first two cases). Height
//! propagation and the rebalance walk then start from the parent of the
//! node that physically left the tree.

use crate::error::{AvlTreeError, ModifyResult};
use crate::types::{AvlTree, Key, NodeId, NULL_NODE};

impl AvlTree {
    /// Deletes one node holding `key`.
    ///
    /// Reports `KeyNotFound` on a miss and leaves the tree unchanged. With
    /// duplicate keys present, the topmost match is the one removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, AvlTreeError};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.extend([10, 5, 15]).unwrap();
    /// tree.delete(5).unwrap();
    /// assert!(!tree.contains(5));
    /// assert_eq!(tree.delete(5), Err(AvlTreeError::KeyNotFound));
    /// ```
    pub fn delete(&mut self, key: Key) -> ModifyResult<()> {
        let target = self.search(key).ok_or(AvlTreeError::KeyNotFound)?;
        let resume_from = self.remove_node(target);
        self.len -= 1;

        // Rebalancing after deletion must examine every ancestor up to the
        // root: one rotation lower down does not guarantee the chain above
        // it is balanced.
        self.propagate_heights(resume_from);
        self.rebalance_from(resume_from);
        Ok(())
    }

    /// Structurally removes `target`, returning the parent of the node
    /// that was physically unlinked (the successor's parent in the
    /// two-children case, possibly `target` itself).
    fn remove_node(&mut self, target: NodeId) -> NodeId {
        let (left, right, parent) = match self.arena.get(target) {
            Some(node) => (node.left, node.right, node.parent),
            None => return NULL_NODE,
        };

        if left == NULL_NODE && right == NULL_NODE {
            // No children: unlink from the parent (or clear the root).
            self.replace_child(parent, target, NULL_NODE);
            self.arena.deallocate(target);
            parent
        } else if left == NULL_NODE || right == NULL_NODE {
            // One child: splice it into the target's position.
            let child = if left == NULL_NODE { right } else { left };
            self.replace_child(parent, target, child);
            self.set_parent(child, parent);
            self.arena.deallocate(target);
            parent
        } else {
            // Two children: the in-order successor (minimum of the right
            // subtree) has at most a right child. Remove it through the
            // cases above, then overwrite the target's key with its key.
            let successor = self.min_node_in(right);
            let successor_key = match self.arena.get(successor) {
                Some(node) => node.key,
                None => return parent,
            };
            let resume_from = self.remove_node(successor);
            if let Some(node) = self.arena.get_mut(target) {
                node.key = successor_key;
            }
            resume_from
        }
    }
}
