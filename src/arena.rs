//! Slab arena used to store tree nodes.
//!
//! Nodes are addressed by `NodeId` indices into contiguous storage, with a
//! free list for slot reuse. Keeping all links as indices means the cyclic
//! parent/child reference graph never owns anything twice, and tearing the
//! tree down is just dropping the arena.

use crate::error::{AvlTreeError, TreeResult};
use crate::types::{NodeId, NULL_NODE};

/// Statistics for an arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    /// Slots currently backing a live item.
    pub allocated_count: usize,
    /// Vacated slots awaiting reuse.
    pub free_count: usize,
    /// Total slots ever created (allocated + free).
    pub total_slots: usize,
}

/// Slab allocator handing out `NodeId`s.
///
/// `allocate` is fallible: the id space is `u32` minus the `NULL_NODE`
/// sentinel, and exhausting it is reported before any slot is touched.
#[derive(Debug, Clone, Default)]
pub struct Arena<T> {
    /// Direct storage; vacated slots hold `T::default()`.
    storage: Vec<T>,
    /// Free slot indices for reuse.
    free_list: Vec<usize>,
    /// Tracks which slots are live.
    allocated: Vec<bool>,
}

impl<T: Default> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated: Vec::new(),
        }
    }

    /// Creates an empty arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a slot for `item` and returns its ID.
    ///
    /// Fails with `AllocationFailed` when the id space is exhausted; the
    /// arena is left untouched in that case.
    pub fn allocate(&mut self, item: T) -> TreeResult<NodeId> {
        if let Some(index) = self.free_list.pop() {
            self.storage[index] = item;
            self.allocated[index] = true;
            return Ok(index as NodeId);
        }

        let index = self.storage.len();
        if index >= NULL_NODE as usize {
            return Err(AvlTreeError::allocation_failed(
                "node",
                "arena id space exhausted",
            ));
        }
        self.storage.push(item);
        self.allocated.push(true);
        Ok(index as NodeId)
    }

    /// Releases the slot for `id` and returns its item, or `None` if the
    /// id is the null sentinel or not currently allocated.
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.index_of(id)?;
        self.allocated[index] = false;
        self.free_list.push(index);
        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Returns a reference to the item for `id`, or `None` for the null
    /// sentinel and unallocated slots.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.index_of(id)?;
        Some(&self.storage[index])
    }

    /// Mutable variant of [`Arena::get`].
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        Some(&mut self.storage[index])
    }

    /// Returns true if `id` refers to a live slot.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of live items.
    pub fn allocated_count(&self) -> usize {
        self.allocated.iter().filter(|&&live| live).count()
    }

    /// Number of vacated slots awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Returns true if the arena holds no live items.
    pub fn is_empty(&self) -> bool {
        self.allocated_count() == 0
    }

    /// Arena statistics snapshot.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            allocated_count: self.allocated_count(),
            free_count: self.free_list.len(),
            total_slots: self.storage.len(),
        }
    }

    /// Drops every item and resets the arena to empty.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated.clear();
        self.free_list.clear();
    }

    /// Maps an ID to a live slot index.
    fn index_of(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = id as usize;
        if self.allocated.get(index).copied().unwrap_or(false) {
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_get() {
        let mut arena: Arena<i32> = Arena::new();
        let a = arena.allocate(42).unwrap();
        let b = arena.allocate(84).unwrap();

        assert_eq!(arena.get(a), Some(&42));
        assert_eq!(arena.get(b), Some(&84));
        assert!(arena.contains(a));
        assert!(!arena.contains(NULL_NODE));
        assert_eq!(arena.allocated_count(), 2);
    }

    #[test]
    fn deallocate_reuses_slot() {
        let mut arena: Arena<i32> = Arena::new();
        let a = arena.allocate(1).unwrap();
        let _b = arena.allocate(2).unwrap();

        assert_eq!(arena.deallocate(a), Some(1));
        assert!(!arena.contains(a));
        assert_eq!(arena.free_count(), 1);

        // The vacated slot is handed out again.
        let c = arena.allocate(3).unwrap();
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    fn deallocate_null_and_stale_ids() {
        let mut arena: Arena<i32> = Arena::new();
        assert_eq!(arena.deallocate(NULL_NODE), None);

        let a = arena.allocate(7).unwrap();
        assert_eq!(arena.deallocate(a), Some(7));
        // Double free is a no-op.
        assert_eq!(arena.deallocate(a), None);
        assert_eq!(arena.get(a), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena: Arena<i32> = Arena::new();
        for i in 0..10 {
            arena.allocate(i).unwrap();
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.stats().total_slots, 0);
    }
}
