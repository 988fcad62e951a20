//! Fixed-capacity object pools backed by generational slot maps.
//!
//! The subdivision preallocates capacity for its vertex and quarter-edge
//! records: a planar triangulation on `n` points has fewer than `3n`
//! undirected edges, so the edge pool is sized at `6n` directed halves and
//! never needs to grow for a legal input. Hitting the capacity anyway is a
//! sizing defect, surfaced as a typed error rather than hidden by silent
//! reallocation.
//!
//! Keys are slotmap keys, so a key released and reused carries a fresh
//! generation: a stale handle can never silently observe the record that
//! recycled its slot.

use slotmap::{Key, SlotMap};
use thiserror::Error;

/// The pool has handed out every slot it was sized for.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("pool capacity exhausted ({capacity} slots); input larger than the pool was sized for")]
pub struct PoolExhaustedError {
    /// The fixed capacity the pool was created with.
    pub capacity: usize,
}

/// A fixed-capacity pool of `V` records addressed by generational keys.
#[derive(Clone, Debug)]
pub struct Pool<K: Key, V> {
    slots: SlotMap<K, V>,
    capacity: usize,
}

impl<K: Key, V> Pool<K, V> {
    /// Creates a pool that will hand out at most `capacity` live records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
            capacity,
        }
    }

    /// Stores `value` and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if `capacity` records are already live.
    pub fn acquire(&mut self, value: V) -> Result<K, PoolExhaustedError> {
        if self.slots.len() >= self.capacity {
            return Err(PoolExhaustedError {
                capacity: self.capacity,
            });
        }
        Ok(self.slots.insert(value))
    }

    /// Removes the record behind `key`, freeing its slot for reuse.
    ///
    /// Returns `None` if the key is stale or was never issued. Reuse order of
    /// freed slots is unspecified.
    pub fn release(&mut self, key: K) -> Option<V> {
        self.slots.remove(key)
    }

    /// Returns a reference to the record behind `key`, if it is live.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots.get(key)
    }

    /// Returns a mutable reference to the record behind `key`, if it is live.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots.get_mut(key)
    }

    /// Whether `key` refers to a live record.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no records are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The fixed capacity this pool was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over `(key, &record)` pairs of live records.
    pub fn iter(&self) -> slotmap::basic::Iter<'_, K, V> {
        self.slots.iter()
    }

    /// Iterates over the keys of live records.
    pub fn keys(&self) -> slotmap::basic::Keys<'_, K, V> {
        self.slots.keys()
    }
}

impl<K: Key, V> std::ops::Index<K> for Pool<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        &self.slots[key]
    }
}

impl<K: Key, V> std::ops::IndexMut<K> for Pool<K, V> {
    fn index_mut(&mut self, key: K) -> &mut V {
        &mut self.slots[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::new_key_type;

    new_key_type! {
        struct TestKey;
    }

    #[test]
    fn acquire_and_release_round_trip() {
        let mut pool: Pool<TestKey, u32> = Pool::with_capacity(2);
        let a = pool.acquire(7).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[a], 7);
        assert_eq!(pool.release(a), Some(7));
        assert!(pool.is_empty());
    }

    #[test]
    fn exhaustion_reports_capacity() {
        let mut pool: Pool<TestKey, u32> = Pool::with_capacity(2);
        pool.acquire(0).unwrap();
        pool.acquire(1).unwrap();
        assert_eq!(pool.acquire(2), Err(PoolExhaustedError { capacity: 2 }));
    }

    #[test]
    fn released_slot_is_reusable() {
        let mut pool: Pool<TestKey, u32> = Pool::with_capacity(1);
        let a = pool.acquire(0).unwrap();
        pool.release(a).unwrap();
        pool.acquire(1).unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn stale_key_does_not_resolve() {
        let mut pool: Pool<TestKey, u32> = Pool::with_capacity(1);
        let a = pool.acquire(0).unwrap();
        pool.release(a);
        let b = pool.acquire(1).unwrap();
        // The slot was recycled, but the generation moved on.
        assert!(pool.get(a).is_none());
        assert!(!pool.contains(a));
        assert_eq!(pool.get(b), Some(&1));
    }

    #[test]
    fn double_release_is_a_no_op() {
        let mut pool: Pool<TestKey, u32> = Pool::with_capacity(1);
        let a = pool.acquire(0).unwrap();
        assert_eq!(pool.release(a), Some(0));
        assert_eq!(pool.release(a), None);
    }
}
