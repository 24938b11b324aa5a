//! Height and balance-factor computation.
//!
//! Heights are cached on the nodes: a leaf has height 0 and an absent child
//! contributes -1. After a structural change the cached heights along the
//! ancestor path are refreshed by `propagate_heights`, which stops as soon
//! as an ancestor's height comes out unchanged, since nothing above it can
//! differ either.

use crate::types::{AvlTree, NodeId, NULL_NODE};

impl AvlTree {
    /// Height of the node `id`, or -1 when the node is absent.
    #[inline]
    pub(crate) fn node_height(&self, id: NodeId) -> i32 {
        self.arena.get(id).map_or(-1, |node| node.height)
    }

    /// Recomputes the cached height of `id` from its children.
    ///
    /// No-op on an absent node.
    pub(crate) fn recompute_height(&mut self, id: NodeId) {
        let (left, right) = match self.arena.get(id) {
            Some(node) => (node.left, node.right),
            None => return,
        };
        let height = 1 + self.node_height(left).max(self.node_height(right));
        if let Some(node) = self.arena.get_mut(id) {
            node.height = height;
        }
    }

    /// Walks parent links from `start` to the root, recomputing each
    /// ancestor's height, and stops early once a height stabilizes.
    pub(crate) fn propagate_heights(&mut self, start: NodeId) {
        let mut current = start;
        while current != NULL_NODE {
            let previous = self.node_height(current);
            self.recompute_height(current);
            if self.node_height(current) == previous {
                break;
            }
            current = self.parent_of(current);
        }
    }

    /// Balance factor of `id`: height(right) - height(left).
    #[inline]
    pub(crate) fn balance_factor(&self, id: NodeId) -> i32 {
        match self.arena.get(id) {
            Some(node) => self.node_height(node.right) - self.node_height(node.left),
            None => 0,
        }
    }
}
