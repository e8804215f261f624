//! Recency-ordered index: hash lookup composed with an intrusive LRU list
//!
//! Slots live in an arena and are addressed by integer handles; the hash
//! map stores key -> handle and each slot carries prev/next handles. No
//! owning pointers, so promotion and eviction are plain handle rewires.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

/// One resident entry and its links in the recency list
struct Slot<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity index ordered from most- (head) to least-recently-used (tail)
pub(crate) struct LruIndex<K, V> {
    map: HashMap<K, usize, RandomState>,
    slots: Vec<Option<Slot<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruIndex<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty index. Capacity must be non-zero; the cache facade
    /// rejects zero before construction ever reaches this point.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            capacity,
        }
    }

    /// Look up a resident key, promoting it to most-recently-used
    pub(crate) fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.promote(idx);
        self.slots[idx].as_ref().map(|slot| &slot.value)
    }

    /// Insert a key that is not currently resident, evicting the tail
    /// entry first when at capacity. Returns the evicted pair, if any.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        debug_assert!(!self.map.contains_key(&key));

        let evicted = if self.map.len() == self.capacity {
            self.evict_tail()
        } else {
            None
        };

        let idx = self.alloc_slot();
        self.slots[idx] = Some(Slot {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.map.insert(key, idx);
        evicted
    }

    /// Number of resident entries
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index holds no entries
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of resident entries
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a key is resident, without touching its recency
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Resident keys in recency order, head (MRU) first
    #[cfg(test)]
    pub(crate) fn keys_mru_to_lru(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.map.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let slot = self.slots[idx].as_ref().expect("linked slot is occupied");
            keys.push(slot.key.clone());
            cursor = slot.next;
        }
        keys
    }

    fn promote(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already MRU
        }

        self.unlink(idx);

        if let Some(slot) = &mut self.slots[idx] {
            slot.prev = None;
            slot.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(slot) = &self.slots[idx] {
            (slot.prev, slot.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_slot) = &mut self.slots[prev_idx] {
                    prev_slot.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_slot) = &mut self.slots[next_idx] {
                    next_slot.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    // Unlink must happen before the slot is vacated, or the neighbour
    // rewires are lost and the list keeps a handle to a freed slot.
    fn evict_tail(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.unlink(idx);
        let slot = self.slots[idx].take()?;
        self.map.remove(&slot.key);
        self.free.push(idx);
        Some((slot.key, slot.value))
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(None);
            idx
        }
    }
}
