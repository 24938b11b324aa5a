//! Error handling and result types for AvlTree operations.
//!
//! Two conditions are reportable: a key missing on lookup or deletion
//! (expected, non-fatal) and node allocation failing (fatal to the single
//! operation). Neither leaves the tree in a state violating its invariants.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlTreeError {
    /// Key not found in the tree. The tree is unchanged.
    KeyNotFound,
    /// Node allocation failed. The operation aborted without partial
    /// mutation; the tree is left in its prior valid state.
    AllocationFailed(String),
    /// Internal structure violation detected during validation.
    CorruptedTree(String),
}

impl AvlTreeError {
    /// Create an `AllocationFailed` error with context.
    pub fn allocation_failed(resource: &str, reason: &str) -> Self {
        Self::AllocationFailed(format!("failed to allocate {}: {}", resource, reason))
    }

    /// Create a `CorruptedTree` error with context.
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a missing-key report.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyNotFound => write!(f, "key not found in tree"),
            AvlTreeError::AllocationFailed(msg) => write!(f, "allocation failed: {}", msg),
            AvlTreeError::CorruptedTree(msg) => write!(f, "corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Internal result type for tree operations.
pub(crate) type TreeResult<T> = Result<T, AvlTreeError>;

/// Public result type for tree operations that may fail.
pub type AvlResult<T> = Result<T, AvlTreeError>;

/// Result type for key lookup operations.
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations.
pub type ModifyResult<T> = Result<T, AvlTreeError>;
