//! `WaitQueue` — requests blocked on a full resource.
//!
//! Keyed by `(priority, enqueue_sequence)` ascending: the most urgent request
//! comes out first, and among equal priorities the one that queued first.
//! `enqueue_sequence` is assigned here and never changes, so a waiting request
//! keeps its position relative to everything already queued.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cc_core::Priority;

/// One blocked request and the handle of the process waiting on it.
#[derive(Debug)]
pub struct Request<W> {
    pub priority:         Priority,
    pub enqueue_sequence: u64,
    pub waiter:           W,
}

impl<W> Request<W> {
    #[inline]
    fn key(&self) -> (Priority, u64) {
        (self.priority, self.enqueue_sequence)
    }
}

impl<W> PartialEq for Request<W> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<W> Eq for Request<W> {}

impl<W> PartialOrd for Request<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Request<W> {
    // Reversed so the max-heap yields the minimum key.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Binary-heap wait queue with a deterministic tie-break.
pub struct WaitQueue<W> {
    heap:          BinaryHeap<Request<W>>,
    next_sequence: u64,
    /// High-water mark of `heap.len()`.
    max_len:       usize,
}

impl<W> Default for WaitQueue<W> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), next_sequence: 0, max_len: 0 }
    }
}

impl<W> WaitQueue<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `waiter` at `priority`.  Returns the assigned enqueue sequence.
    pub fn push(&mut self, priority: Priority, waiter: W) -> u64 {
        let enqueue_sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Request { priority, enqueue_sequence, waiter });
        self.max_len = self.max_len.max(self.heap.len());
        enqueue_sequence
    }

    /// Remove the most urgent, earliest-queued request.
    pub fn pop(&mut self) -> Option<Request<W>> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&Request<W>> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
