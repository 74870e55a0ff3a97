use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// A min-priority queue whose keys can be lowered in place.
///
/// Values are unique; each one is bound to a key. Keys only ever decrease,
/// matching the monotonic nature of relaxation.
pub trait DecreaseKeyQueue<K, V> {
    /// Short name of the backend, used in logs
    const BACKEND: &'static str;

    /// Inserts `value` with priority `key`. Fails if `value` is already queued.
    fn insert(&mut self, key: K, value: V) -> Result<()>;

    /// Removes the value with the smallest key. Fails on an empty queue.
    fn extract_min(&mut self) -> Result<(V, K)>;

    /// Lowers the key of `value` to `new_key`.
    ///
    /// Fails with [`Error::NoSuchElement`] if `value` is not queued and with
    /// [`Error::InvalidKey`] if `new_key` is greater than the current key.
    /// An equal key is accepted and changes nothing.
    fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()>;

    /// Returns true if `value` is queued
    fn contains(&self, value: &V) -> bool;

    /// Current key of a queued value
    fn key_of(&self, value: &V) -> Option<K>;

    /// Smallest entry without removing it
    fn peek_min(&self) -> Option<(&V, K)>;

    /// Number of queued values
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry order shared by every backend: smaller key first, and on equal
/// keys the smaller value. The order is total over distinct values, so any
/// two backends fed the same operations extract the same sequence.
pub(crate) fn precedes<K, V>(a: (&K, &V), b: (&K, &V)) -> bool
where
    K: PartialOrd,
    V: Ord,
{
    a.0 < b.0 || (!(b.0 < a.0) && a.1 < b.1)
}

/// Array-backed binary min-heap with a value -> slot index map.
///
/// The index map makes `contains` O(1) and lets `decrease_key` find its
/// entry without scanning, so it runs in O(log n).
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<K, V>
where
    V: Eq + Hash,
{
    /// Heap-ordered entries
    entries: Vec<(K, V)>,

    /// value -> slot in `entries`
    positions: HashMap<V, usize>,
}

impl<K, V> Default for IndexedBinaryHeap<K, V>
where
    V: Eq + Hash,
{
    fn default() -> Self {
        IndexedBinaryHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K, V> IndexedBinaryHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Ord + Hash + Clone + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinaryHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a queue from `(key, value)` pairs in O(n) by bottom-up heapify.
    /// Fails if a value occurs twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        let mut heap = Self::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            if heap.positions.contains_key(&value) {
                return Err(Error::DuplicateValue);
            }
            heap.positions.insert(value.clone(), heap.entries.len());
            heap.entries.push((key, value));
        }
        for idx in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(idx);
        }
        Ok(heap)
    }

    /// Checks the heap order and that every indexed slot holds its value
    pub fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len()).all(|idx| !self.less(idx, (idx - 1) / 2));
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(idx, (_, value))| self.positions.get(value) == Some(&idx));
        ordered && indexed
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a_key, a_value) = &self.entries[a];
        let (b_key, b_value) = &self.entries[b];
        precedes((a_key, a_value), (b_key, b_value))
    }

    /// Swaps two slots and keeps the index map in step
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.entries[a].1) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.entries[b].1) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent) {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<K, V> DecreaseKeyQueue<K, V> for IndexedBinaryHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Ord + Hash + Clone + Debug,
{
    const BACKEND: &'static str = "indexed binary heap";

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.positions.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }
        let idx = self.entries.len();
        self.positions.insert(value.clone(), idx);
        self.entries.push((key, value));
        self.sift_up(idx);
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(V, K)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, value) = self.entries.pop().ok_or(Error::EmptyQueue)?;
        self.positions.remove(&value);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((value, key))
    }

    fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()> {
        let idx = *self.positions.get(value).ok_or(Error::NoSuchElement)?;
        let current = self.entries[idx].0;
        if new_key > current {
            return Err(Error::InvalidKey);
        }
        if new_key < current {
            self.entries[idx].0 = new_key;
            self.sift_up(idx);
        }
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    fn key_of(&self, value: &V) -> Option<K> {
        self.positions.get(value).map(|&idx| self.entries[idx].0)
    }

    fn peek_min(&self) -> Option<(&V, K)> {
        self.entries.first().map(|(key, value)| (value, *key))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_key_order() {
        let mut heap = IndexedBinaryHeap::new();
        for (key, value) in [(5.0, 'a'), (1.0, 'b'), (3.0, 'c'), (4.0, 'd')] {
            heap.insert(key, value).unwrap();
        }
        let order: Vec<char> = (0..4).map(|_| heap.extract_min().unwrap().0).collect();
        assert_eq!(order, vec!['b', 'c', 'd', 'a']);
        assert!(matches!(heap.extract_min(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn decrease_key_moves_value_to_front() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert(10.0, 1).unwrap();
        heap.insert(20.0, 2).unwrap();
        heap.insert(30.0, 3).unwrap();

        heap.decrease_key(&3, 5.0).unwrap();
        assert!(heap.is_consistent());
        assert_eq!(heap.peek_min(), Some((&3, 5.0)));
        assert_eq!(heap.key_of(&3), Some(5.0));
    }

    #[test]
    fn decrease_key_rejects_larger_key_and_missing_value() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert(10.0, 1).unwrap();

        assert!(matches!(heap.decrease_key(&1, 11.0), Err(Error::InvalidKey)));
        assert!(matches!(heap.decrease_key(&9, 1.0), Err(Error::NoSuchElement)));
        heap.decrease_key(&1, 10.0).unwrap();
        assert_eq!(heap.key_of(&1), Some(10.0));
    }

    #[test]
    fn duplicate_values_are_rejected() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert(1.0, "x").unwrap();
        assert!(matches!(heap.insert(0.0, "x"), Err(Error::DuplicateValue)));
        assert_eq!(heap.len(), 1);

        let bulk = IndexedBinaryHeap::from_entries([(1.0, "y"), (2.0, "y")]);
        assert!(matches!(bulk, Err(Error::DuplicateValue)));
    }

    #[test]
    fn equal_keys_extract_in_value_order() {
        let mut heap = IndexedBinaryHeap::new();
        for value in [4, 1, 3, 0, 2] {
            heap.insert(1.0, value).unwrap();
        }
        heap.insert(5.0, 9).unwrap();
        heap.decrease_key(&9, 1.0).unwrap();
        assert!(heap.is_consistent());

        let order: Vec<i32> = (0..6).map(|_| heap.extract_min().unwrap().0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 9]);
    }

    #[test]
    fn from_entries_heapifies() {
        let heap =
            IndexedBinaryHeap::from_entries((0..20).map(|i| (((i * 7) % 20) as f64, i))).unwrap();
        assert!(heap.is_consistent());
        assert_eq!(heap.peek_min().map(|(_, key)| key), Some(0.0));
    }
}
