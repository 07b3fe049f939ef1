//! Frontier strategies: stack, queue and binary-heap priority queue.
//!
//! All three implement [`Frontier`], so the traversal engine drives them
//! through one interface. The stack and queue ignore the priority argument.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Ordered work-list of items awaiting expansion.
pub trait Frontier<T> {
    /// Add an item. `priority` is only consulted by priority-ordered frontiers.
    fn push(&mut self, item: T, priority: f64);

    /// Remove the next item in strategy order.
    fn pop(&mut self) -> Option<T>;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier (depth-first order).
#[derive(Debug)]
pub struct StackFrontier<T> {
    items: Vec<T>,
    high_water: usize,
}

impl<T> StackFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in-first-out frontier (breadth-first order).
#[derive(Debug)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
    high_water: usize,
}

impl<T> QueueFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Ordering key for priority entries: `(priority, insertion_order)`.
///
/// Lower priority first; ties broken by older insertion. Priorities compare
/// with `f64::total_cmp`, so the order is total even for NaN (which the
/// engine never pushes).
#[derive(Debug, Clone, Copy)]
struct PriorityKey {
    priority: f64,
    insertion_order: u64,
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

/// A heap entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<PriorityKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct PriorityEntry<T> {
    key: Reverse<PriorityKey>,
    item: T,
}

impl<T> PartialEq for PriorityEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for PriorityEntry<T> {}

impl<T> PartialOrd for PriorityEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PriorityEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier backed by a `BinaryHeap`.
///
/// Duplicate items are allowed. Callers that improve an item's priority push
/// it again and discard the stale entry when it is popped later.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<PriorityEntry<T>>,
    next_insertion: u64,
    high_water: usize,
}

impl<T> PriorityFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// Priority of the entry that `pop` would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key.0.priority)
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: f64) {
        let key = PriorityKey {
            priority,
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
