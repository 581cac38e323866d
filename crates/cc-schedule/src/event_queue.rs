//! `EventQueue` — pending timed events ordered by `(time, sequence)`.
//!
//! # Ordering
//!
//! Events are popped in ascending `(time, sequence)` order.  `sequence` is
//! assigned by the queue at insertion and strictly increases, so two events
//! for the same simulated minute fire in the order they were scheduled.  That
//! total order is what makes a run reproducible under a fixed seed.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log E) push and pop where E = number of pending
//! events.  A call-center run keeps at most one arrival plus one completion
//! per operator plus a handful of zero-delay resumptions pending, so E stays
//! tiny.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cc_core::SimTime;

/// One pending event.  Owned by the queue until it is popped.
#[derive(Debug)]
pub struct ScheduledEvent<A> {
    pub time:     SimTime,
    pub sequence: u64,
    pub action:   A,
}

impl<A> ScheduledEvent<A> {
    #[inline]
    pub fn key(&self) -> (SimTime, u64) {
        (self.time, self.sequence)
    }
}

impl<A> PartialEq for ScheduledEvent<A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<A> Eq for ScheduledEvent<A> {}

impl<A> PartialOrd for ScheduledEvent<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for ScheduledEvent<A> {
    /// Reversed: `BinaryHeap` is a max-heap and we want the earliest key on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// A min-queue of [`ScheduledEvent`]s keyed by `(time, sequence)`.
pub struct EventQueue<A> {
    heap:          BinaryHeap<ScheduledEvent<A>>,
    next_sequence: u64,
}

impl<A> Default for EventQueue<A> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), next_sequence: 0 }
    }
}

impl<A> EventQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `action` at absolute `time`, returning its sequence number.
    pub fn push(&mut self, time: SimTime, action: A) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(ScheduledEvent { time, sequence, action });
        sequence
    }

    /// Remove and return the minimum-key event.
    pub fn pop(&mut self) -> Option<ScheduledEvent<A>> {
        self.heap.pop()
    }

    /// The minimum-key event without removing it.
    pub fn peek(&self) -> Option<&ScheduledEvent<A>> {
        self.heap.peek()
    }

    /// Time of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of events ever inserted.
    pub fn scheduled_total(&self) -> u64 {
        self.next_sequence
    }
}
