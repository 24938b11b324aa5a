//! Core types and data structures for AvlTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the AVL tree implementation.

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Key type stored in the tree.
pub type Key = i64;

/// Node ID type for arena-based allocation.
pub type NodeId = u32;

/// Sentinel ID for an absent link (missing child, parent of the root).
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A height-balanced binary search tree (AVL) over signed integer keys.
///
/// Nodes live in a contiguous arena and reference each other by `NodeId`,
/// so the parent back-reference is a plain index rather than an ownership
/// edge. Every public operation leaves the tree with correct cached heights,
/// balance factors in `{-1, 0, 1}`, and consistent parent links, which caps
/// the height (and thus every descent and ancestor walk) at O(log n).
///
/// Duplicate keys are permitted and resolve to the right subtree.
///
/// # Examples
///
/// ```
/// use avltree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10).unwrap();
/// tree.insert(20).unwrap();
/// tree.insert(30).unwrap();
///
/// // The single left rotation keeps the tree balanced.
/// assert_eq!(tree.height(), 1);
/// let keys: Vec<_> = tree.keys().collect();
/// assert_eq!(keys, [10, 20, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree {
    /// The root node, or `NULL_NODE` for an empty tree.
    pub(crate) root: NodeId,
    /// Number of nodes currently in the tree.
    pub(crate) len: usize,
    /// Arena storage for all nodes. Dropping the arena tears the whole
    /// tree down without any recursive traversal.
    pub(crate) arena: Arena<AvlNode>,
}

/// A single tree node: key, cached height, and its arena links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlNode {
    /// Ordering and identity field.
    pub(crate) key: Key,
    /// Cached height: leaf = 0, an absent child contributes -1.
    pub(crate) height: i32,
    /// Owning link to the left child.
    pub(crate) left: NodeId,
    /// Owning link to the right child.
    pub(crate) right: NodeId,
    /// Lookup-only back-reference; never followed for deallocation.
    pub(crate) parent: NodeId,
}

impl AvlNode {
    /// Creates a fresh leaf node: height 0, no child links.
    pub(crate) fn leaf(key: Key, parent: NodeId) -> Self {
        Self {
            key,
            height: 0,
            left: NULL_NODE,
            right: NULL_NODE,
            parent,
        }
    }

    /// The node's key.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The node's cached height.
    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for AvlNode {
    /// Placeholder node used when a slot is vacated in the arena.
    fn default() -> Self {
        Self::leaf(0, NULL_NODE)
    }
}
