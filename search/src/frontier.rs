//! Frontier containers: the exploration-order policies.
//!
//! Every container exposes the same [`Frontier`] surface so the search loop
//! can be written once. Popping an empty container is a precondition
//! violation and panics; use [`Frontier::try_pop`] to check first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::contract::Cost;

/// An ordered container of pending search entries.
pub trait Frontier<T> {
    /// Insert an item. Containers that do not order by priority ignore it.
    fn push(&mut self, item: T, priority: Cost);

    /// Remove the next item, or `None` if the container is empty.
    fn try_pop(&mut self) -> Option<T>;

    /// Number of items currently held.
    fn len(&self) -> usize;

    /// Remove the next item.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(item) => item,
            None => panic!("pop from an empty frontier"),
        }
    }

    /// Whether the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out container.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T, _priority: Cost) {
        self.items.push(item);
    }

    fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out container.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T, _priority: Cost) {
        self.items.push_back(item);
    }

    fn try_pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// The priority queue ordering key: `(priority, insertion_order)`.
///
/// Lower priority first; equal priorities are served in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PriorityKey {
    priority: Cost,
    insertion_order: u64,
}

/// A heap entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<PriorityKey>` to get
/// min-heap behavior. Only the key participates in comparisons.
#[derive(Debug)]
struct HeapEntry<T> {
    key: Reverse<PriorityKey>,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority container with FIFO tie-breaking.
///
/// O(log n) push and pop. Duplicate items are allowed; stale entries are
/// discarded by the caller at pop time rather than decreased in place.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_insertion: u64,
}

impl<T> PriorityQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityQueue<T> {
    fn push(&mut self, item: T, priority: Cost) {
        let key = PriorityKey {
            priority,
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(HeapEntry {
            key: Reverse(key),
            item,
        });
    }

    fn try_pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
