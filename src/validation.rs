//! Validation and debugging utilities for AvlTree.
//!
//! Checks the four structural invariants the tree guarantees after every
//! public operation: BST key order, cached-height correctness, balance
//! factors in {-1, 0, 1}, and parent back-reference consistency, plus
//! agreement between the tree, its length counter, and the arena.

use crate::error::{AvlTreeError, TreeResult};
use crate::types::{AvlTree, Key, NodeId, NULL_NODE};

impl AvlTree {
    /// Check if the tree maintains all AVL invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.root != NULL_NODE && self.parent_of(self.root) != NULL_NODE {
            return Err("root node has a parent reference".to_string());
        }

        let count = self
            .check_node_invariants(self.root, None, None, NULL_NODE)
            .map_err(|e| e.to_string())?;

        // The tree, its length counter, and the arena must agree on how
        // many nodes exist.
        if count != self.len {
            return Err(format!("tree has {} nodes but len is {}", count, self.len));
        }
        let allocated = self.arena.allocated_count();
        if count != allocated {
            return Err(format!(
                "tree has {} nodes but arena has {} allocated",
                count, allocated
            ));
        }
        Ok(())
    }

    /// Alias for `check_invariants_detailed` (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Recursively check one subtree; returns its node count.
    ///
    /// `min`/`max` carry the BST bounds: every key in a left subtree is
    /// strictly below its ancestor's key, every key in a right subtree is
    /// greater or equal (duplicates live to the right).
    fn check_node_invariants(
        &self,
        id: NodeId,
        min: Option<Key>,
        max: Option<Key>,
        expected_parent: NodeId,
    ) -> TreeResult<usize> {
        if id == NULL_NODE {
            return Ok(0);
        }
        let node = self.arena.get(id).ok_or_else(|| {
            AvlTreeError::corrupted_tree("arena", &format!("node {} is not allocated", id))
        })?;

        if let Some(min) = min {
            if node.key < min {
                return Err(AvlTreeError::corrupted_tree(
                    "key order",
                    &format!("key {} below lower bound {}", node.key, min),
                ));
            }
        }
        if let Some(max) = max {
            if node.key >= max {
                return Err(AvlTreeError::corrupted_tree(
                    "key order",
                    &format!("key {} at or above upper bound {}", node.key, max),
                ));
            }
        }

        if node.parent != expected_parent {
            return Err(AvlTreeError::corrupted_tree(
                "parent links",
                &format!(
                    "node {} has parent {} but is linked under {}",
                    id, node.parent, expected_parent
                ),
            ));
        }

        let left_count = self.check_node_invariants(node.left, min, Some(node.key), id)?;
        let right_count = self.check_node_invariants(node.right, Some(node.key), max, id)?;

        let expected_height = 1 + self.node_height(node.left).max(self.node_height(node.right));
        if node.height != expected_height {
            return Err(AvlTreeError::corrupted_tree(
                "heights",
                &format!(
                    "node {} caches height {} but children imply {}",
                    id, node.height, expected_height
                ),
            ));
        }

        let factor = self.balance_factor(id);
        if !(-1..=1).contains(&factor) {
            return Err(AvlTreeError::corrupted_tree(
                "balance",
                &format!("node {} has balance factor {}", id, factor),
            ));
        }

        Ok(left_count + right_count + 1)
    }

    // ========================================================================
    // DEBUGGING UTILITIES
    // ========================================================================

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self) {
        println!("AvlTree (len={}, height={}):", self.len, self.height());
        self.print_node(self.root, 0);
    }

    fn print_node(&self, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.arena.get(id) {
            Some(node) => {
                println!("{}[id={}] key={} h={}", indent, id, node.key, node.height);
                if node.left != NULL_NODE || node.right != NULL_NODE {
                    self.print_node(node.left, depth + 1);
                    self.print_node(node.right, depth + 1);
                }
            }
            None if id == NULL_NODE => println!("{}-", indent),
            None => println!("{}[id={}] <missing>", indent, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tree_passes() {
        let mut tree = AvlTree::new();
        tree.extend([9, 4, 12, 2, 7, 15]).unwrap();
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn empty_tree_passes() {
        let tree = AvlTree::new();
        assert!(tree.check_invariants());
    }

    #[test]
    fn detects_corrupted_height() {
        let mut tree = AvlTree::new();
        tree.extend([10, 5, 15]).unwrap();
        let root = tree.root().unwrap();
        tree.arena.get_mut(root).unwrap().height = 5;

        let err = tree.validate().unwrap_err();
        assert!(err.contains("heights"), "unexpected report: {}", err);
    }

    #[test]
    fn detects_broken_parent_link() {
        let mut tree = AvlTree::new();
        tree.extend([10, 5, 15]).unwrap();
        let leaf = tree.search(5).unwrap();
        tree.arena.get_mut(leaf).unwrap().parent = NULL_NODE;

        let err = tree.validate().unwrap_err();
        assert!(err.contains("parent"), "unexpected report: {}", err);
    }

    #[test]
    fn detects_key_order_violation() {
        let mut tree = AvlTree::new();
        tree.extend([10, 5, 15]).unwrap();
        let leaf = tree.search(5).unwrap();
        tree.arena.get_mut(leaf).unwrap().key = 99;

        let err = tree.validate().unwrap_err();
        assert!(err.contains("key"), "unexpected report: {}", err);
    }

    #[test]
    fn detects_len_mismatch() {
        let mut tree = AvlTree::new();
        tree.extend([10, 5, 15]).unwrap();
        tree.len = 7;

        let err = tree.validate().unwrap_err();
        assert!(err.contains("len"), "unexpected report: {}", err);
    }
}
