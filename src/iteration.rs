//! Traversal iterators for AvlTree.
//!
//! In-order, pre-order, and post-order traversal, each yielding `(key,
//! height)` pairs lazily. Every call constructs a fresh iterator, so
//! traversals are restartable; the walks use an explicit stack whose depth
//! is bounded by the tree height, which the balance invariant keeps at
//! O(log n).

use crate::types::{AvlTree, Key, NodeId, NULL_NODE};

/// One stack frame: a node plus whether its children have been expanded.
type Frame = (NodeId, bool);

/// In-order traversal: left subtree, node, right subtree (ascending keys).
pub struct InOrderIter<'a> {
    tree: &'a AvlTree,
    stack: Vec<Frame>,
}

/// Pre-order traversal: node, left subtree, right subtree.
pub struct PreOrderIter<'a> {
    tree: &'a AvlTree,
    stack: Vec<NodeId>,
}

/// Post-order traversal: left subtree, right subtree, node.
pub struct PostOrderIter<'a> {
    tree: &'a AvlTree,
    stack: Vec<Frame>,
}

impl AvlTree {
    /// Returns a lazy in-order traversal of `(key, height)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.extend([20, 10, 30]).unwrap();
    /// let pairs: Vec<_> = tree.iter_in_order().collect();
    /// assert_eq!(pairs, [(10, 0), (20, 1), (30, 0)]);
    /// ```
    pub fn iter_in_order(&self) -> InOrderIter<'_> {
        InOrderIter {
            tree: self,
            stack: start_frames(self.root),
        }
    }

    /// Returns a lazy pre-order traversal of `(key, height)` pairs.
    pub fn iter_pre_order(&self) -> PreOrderIter<'_> {
        let stack = if self.root == NULL_NODE {
            Vec::new()
        } else {
            vec![self.root]
        };
        PreOrderIter { tree: self, stack }
    }

    /// Returns a lazy post-order traversal of `(key, height)` pairs.
    pub fn iter_post_order(&self) -> PostOrderIter<'_> {
        PostOrderIter {
            tree: self,
            stack: start_frames(self.root),
        }
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter_in_order().map(|(key, _)| key)
    }
}

fn start_frames(root: NodeId) -> Vec<Frame> {
    if root == NULL_NODE {
        Vec::new()
    } else {
        vec![(root, false)]
    }
}

impl Iterator for InOrderIter<'_> {
    type Item = (Key, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let node = self.tree.arena.get(id)?;
            if expanded {
                return Some((node.key, node.height));
            }
            // Reverse push order: left is processed first, then the node
            // itself, then the right subtree.
            if node.right != NULL_NODE {
                self.stack.push((node.right, false));
            }
            self.stack.push((id, true));
            if node.left != NULL_NODE {
                self.stack.push((node.left, false));
            }
        }
        None
    }
}

impl Iterator for PreOrderIter<'_> {
    type Item = (Key, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.arena.get(id)?;
        if node.right != NULL_NODE {
            self.stack.push(node.right);
        }
        if node.left != NULL_NODE {
            self.stack.push(node.left);
        }
        Some((node.key, node.height))
    }
}

impl Iterator for PostOrderIter<'_> {
    type Item = (Key, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let node = self.tree.arena.get(id)?;
            if expanded {
                return Some((node.key, node.height));
            }
            self.stack.push((id, true));
            if node.right != NULL_NODE {
                self.stack.push((node.right, false));
            }
            if node.left != NULL_NODE {
                self.stack.push((node.left, false));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds the tree 20(10, 30(25, 50)) by insertion order that triggers
    // no further rotations once shaped.
    fn sample_tree() -> AvlTree {
        let mut tree = AvlTree::new();
        tree.extend([20, 10, 30, 25, 50]).unwrap();
        tree
    }

    #[test]
    fn in_order_is_ascending_with_heights() {
        let tree = sample_tree();
        let pairs: Vec<_> = tree.iter_in_order().collect();
        assert_eq!(pairs, [(10, 0), (20, 2), (25, 0), (30, 1), (50, 0)]);
    }

    #[test]
    fn pre_order_visits_root_first() {
        let tree = sample_tree();
        let keys: Vec<_> = tree.iter_pre_order().map(|(k, _)| k).collect();
        assert_eq!(keys, [20, 10, 30, 25, 50]);
    }

    #[test]
    fn post_order_visits_root_last() {
        let tree = sample_tree();
        let keys: Vec<_> = tree.iter_post_order().map(|(k, _)| k).collect();
        assert_eq!(keys, [10, 25, 50, 30, 20]);
    }

    #[test]
    fn traversals_on_empty_tree_yield_nothing() {
        let tree = AvlTree::new();
        assert_eq!(tree.iter_in_order().count(), 0);
        assert_eq!(tree.iter_pre_order().count(), 0);
        assert_eq!(tree.iter_post_order().count(), 0);
    }

    #[test]
    fn traversals_are_restartable() {
        let tree = sample_tree();
        let first: Vec<_> = tree.iter_in_order().collect();
        let second: Vec<_> = tree.iter_in_order().collect();
        assert_eq!(first, second);

        // Partially consuming one iterator does not disturb another.
        let mut partial = tree.iter_in_order();
        partial.next();
        let full: Vec<_> = tree.iter_in_order().collect();
        assert_eq!(full, first);
    }

    #[test]
    fn traversals_are_lazy() {
        let tree = sample_tree();
        let mut iter = tree.iter_in_order();
        assert_eq!(iter.next(), Some((10, 0)));
        assert_eq!(iter.next(), Some((20, 2)));
        // Dropping the iterator midway is fine.
    }
}
