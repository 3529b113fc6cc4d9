use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Which end of the priority range a queue extracts first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOrder {
    /// Smallest priority is extracted first
    Min,
    /// Largest priority is extracted first
    Max,
}

impl QueueOrder {
    /// Returns true if `a` strictly beats `b` under this ordering
    fn beats<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            QueueOrder::Min => a < b,
            QueueOrder::Max => a > b,
        }
    }
}

#[derive(Debug, Clone)]
struct Node<K, P> {
    priority: P,
    key: K,
}

/// A binary-heap priority queue that can re-prioritize an element in place.
///
/// Elements are identified by their key. Every heap slot a key occupies is
/// tracked in a position map that is kept in sync on each swap, so locating an
/// element for `update_priority` or `is_in_queue` never scans the heap.
///
/// The same key may be enqueued more than once; each copy is a separate heap
/// entry and `update_priority` applies to all of them.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries
    heap: Vec<Node<K, P>>,

    /// key -> heap slots currently holding that key
    positions: HashMap<K, Vec<usize>>,

    /// Comparison direction, fixed at construction
    order: QueueOrder,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates an empty queue with the given ordering
    pub fn new(order: QueueOrder) -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
            order,
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(order: QueueOrder, capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            order,
        }
    }

    /// Creates an empty min-ordered queue
    pub fn min() -> Self {
        Self::new(QueueOrder::Min)
    }

    /// Creates an empty max-ordered queue
    pub fn max() -> Self {
        Self::new(QueueOrder::Max)
    }

    /// Returns the ordering fixed at construction
    pub fn order(&self) -> QueueOrder {
        self.order
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `key` with the given priority.
    ///
    /// No duplicate detection is done: enqueueing a key that is already
    /// present adds a second entry for it.
    pub fn enqueue(&mut self, priority: P, key: K) {
        let slot = self.heap.len();
        self.heap.push(Node { priority, key });
        self.positions.entry(key).or_default().push(slot);
        self.sift_up(slot);
    }

    /// Removes the extreme entry and returns its key
    pub fn dequeue(&mut self) -> Result<K> {
        self.dequeue_with_priority().map(|(key, _)| key)
    }

    /// Removes the extreme entry and returns it together with its priority
    pub fn dequeue_with_priority(&mut self) -> Result<(K, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let node = match self.heap.pop() {
            Some(node) => node,
            None => return Err(Error::EmptyQueue),
        };
        self.forget_slot(node.key, last);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((node.key, node.priority))
    }

    /// Returns the extreme entry without removing it
    pub fn peek(&self) -> Option<(K, P)> {
        self.heap.first().map(|node| (node.key, node.priority))
    }

    /// Sets the priority of every entry holding `key` and restores heap order.
    ///
    /// Does nothing if `key` is not in the queue.
    pub fn update_priority(&mut self, key: &K, priority: P) {
        // Fix one stale copy at a time so every sift starts from a valid heap.
        // Sifting never changes a priority, so the stale count only shrinks.
        while let Some(slot) = self.stale_slot(key, priority) {
            self.heap[slot].priority = priority;
            let slot = self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    fn stale_slot(&self, key: &K, priority: P) -> Option<usize> {
        self.positions
            .get(key)?
            .iter()
            .copied()
            .find(|&slot| self.heap[slot].priority != priority)
    }

    /// Returns true if at least one entry holds `key`
    pub fn is_in_queue(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the priority of an entry holding `key`, if any
    pub fn priority_of(&self, key: &K) -> Option<P> {
        self.positions
            .get(key)
            .and_then(|slots| slots.first())
            .map(|&slot| self.heap[slot].priority)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Returns the slot the node ends up in
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = parent(i);
            if !self.order.beats(&self.heap[i].priority, &self.heap[p].priority) {
                break;
            }
            self.swap(i, p);
            i = p;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(i);
            let right = right_child(i);
            let mut best = i;

            if left < len && self.order.beats(&self.heap[left].priority, &self.heap[best].priority) {
                best = left;
            }
            if right < len && self.order.beats(&self.heap[right].priority, &self.heap[best].priority) {
                best = right;
            }

            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let key_i = self.heap[i].key;
        let key_j = self.heap[j].key;
        self.move_slot(key_i, i, j);
        self.move_slot(key_j, j, i);
        self.heap.swap(i, j);
    }

    fn move_slot(&mut self, key: K, from: usize, to: usize) {
        if let Some(slots) = self.positions.get_mut(&key) {
            if let Some(slot) = slots.iter_mut().find(|slot| **slot == from) {
                *slot = to;
            }
        }
    }

    fn forget_slot(&mut self, key: K, slot: usize) {
        if let Some(slots) = self.positions.get_mut(&key) {
            slots.retain(|s| *s != slot);
            if slots.is_empty() {
                self.positions.remove(&key);
            }
        }
    }
}

impl<K, P> Default for IndexedPriorityQueue<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap<K, P>(queue: &IndexedPriorityQueue<K, P>)
    where
        K: Copy + Eq + Hash + Debug,
        P: Ord + Copy + Debug,
    {
        for i in 1..queue.heap.len() {
            let p = parent(i);
            assert!(
                !queue.order.beats(&queue.heap[i].priority, &queue.heap[p].priority),
                "slot {} beats its parent {}",
                i,
                p
            );
        }
        for (key, slots) in &queue.positions {
            assert!(!slots.is_empty());
            for &slot in slots {
                assert_eq!(queue.heap[slot].key, *key, "stale position for {:?}", key);
            }
        }
        let tracked: usize = queue.positions.values().map(|s| s.len()).sum();
        assert_eq!(tracked, queue.heap.len());
    }

    #[test]
    fn test_heap_invariant_under_mixed_operations() {
        let mut queue = IndexedPriorityQueue::min();
        for (i, p) in [50, 20, 70, 10, 40, 60, 30, 80].iter().enumerate() {
            queue.enqueue(*p, i);
            assert_heap(&queue);
        }

        queue.update_priority(&7, 5);
        assert_heap(&queue);
        queue.update_priority(&3, 90);
        assert_heap(&queue);

        assert_eq!(queue.dequeue().unwrap(), 7);
        assert_heap(&queue);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_heap(&queue);

        queue.enqueue(15, 8);
        queue.update_priority(&0, 1);
        assert_heap(&queue);

        while !queue.is_empty() {
            queue.dequeue().unwrap();
            assert_heap(&queue);
        }
        assert!(queue.positions.is_empty());
    }

    #[test]
    fn test_max_heap_invariant() {
        let mut queue = IndexedPriorityQueue::max();
        for (i, p) in [3, 9, 1, 7, 5].iter().enumerate() {
            queue.enqueue(*p, i);
        }
        queue.update_priority(&2, 100);
        assert_heap(&queue);
        queue.update_priority(&1, 0);
        assert_heap(&queue);
    }

    #[test]
    fn test_update_reaches_copies_that_swapped_with_each_other() {
        let mut queue = IndexedPriorityQueue::min();
        queue.enqueue(50, 'a');
        // The second copy sifts above the first
        queue.enqueue(10, 'a');
        queue.enqueue(100, 'z');
        assert_eq!(queue.heap[0].priority, 10);
        assert_heap(&queue);

        queue.update_priority(&'a', 5);
        assert_heap(&queue);
        assert!(queue.heap.iter().filter(|n| n.key == 'a').all(|n| n.priority == 5));
    }

    #[test]
    fn test_duplicate_positions_tracked() {
        let mut queue = IndexedPriorityQueue::min();
        queue.enqueue(10, 'a');
        queue.enqueue(5, 'b');
        queue.enqueue(20, 'a');
        queue.enqueue(1, 'c');
        assert_eq!(queue.positions[&'a'].len(), 2);
        assert_heap(&queue);

        queue.update_priority(&'a', 0);
        assert_heap(&queue);
        assert!(queue.heap.iter().filter(|n| n.key == 'a').all(|n| n.priority == 0));
    }
}
