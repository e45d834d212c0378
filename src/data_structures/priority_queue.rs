use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{Error, Result};

/// An indexed binary min-heap for shortest path algorithms
///
/// Holds at most one entry per vertex. A vertex -> heap position index makes
/// `decrease_key` and `extract_min` O(log n). Entries with equal priority
/// leave the queue in the order their vertices were first inserted; a
/// decrease-key keeps the original insertion rank.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered entries
    heap: Vec<HeapEntry<V, P>>,

    /// vertex -> index in `heap`
    positions: FxHashMap<V, usize>,

    /// Insertion rank handed to the next new vertex
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct HeapEntry<V, P> {
    vertex: V,
    priority: P,
    sequence: u64,
}

impl<V, P> HeapEntry<V, P>
where
    P: PartialOrd,
{
    /// Ordering by priority, then insertion rank
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.sequence < other.sequence,
        }
    }
}

impl<V, P> Default for IndexedPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> IndexedPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    /// Creates an empty priority queue with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the vertex is currently queued
    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Current priority of a queued vertex
    pub fn priority(&self, vertex: &V) -> Option<P> {
        self.positions.get(vertex).map(|&position| self.heap[position].priority)
    }

    /// Inserts a vertex, or lowers its priority if it is already queued
    ///
    /// Never raises the priority of a queued vertex. Returns true if the
    /// queue changed.
    pub fn insert(&mut self, vertex: V, priority: P) -> bool {
        if let Some(&position) = self.positions.get(&vertex) {
            return self.decrease_at(position, priority);
        }

        let position = self.heap.len();
        self.positions.insert(vertex.clone(), position);
        self.heap.push(HeapEntry {
            vertex,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.sift_up(position);
        true
    }

    /// Lowers the priority of a queued vertex
    ///
    /// Does nothing if the vertex is absent or `priority` is not strictly
    /// smaller than its current one. Returns true if the queue changed.
    pub fn decrease_key(&mut self, vertex: &V, priority: P) -> bool {
        match self.positions.get(vertex) {
            Some(&position) => self.decrease_at(position, priority),
            None => false,
        }
    }

    /// Removes the entry with the smallest priority
    pub fn extract_min(&mut self) -> Result<(V, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.positions.remove(&entry.vertex);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.first().map(|entry| (&entry.vertex, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
        self.next_sequence = 0;
    }

    fn decrease_at(&mut self, position: usize, priority: P) -> bool {
        if !(priority < self.heap[position].priority) {
            return false;
        }
        self.heap[position].priority = priority;
        self.sift_up(position);
        true
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.heap[position].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == position {
                break;
            }

            self.swap(position, smallest);
            position = smallest;
        }
    }

    /// Swaps two heap slots and keeps the position index in sync
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        if let Some(position) = self.positions.get_mut(&self.heap[a].vertex) {
            *position = a;
        }
        if let Some(position) = self.positions.get_mut(&self.heap[b].vertex) {
            *position = b;
        }
    }
}
