//! The `PriorityResource` struct and its grant/release protocol.

use std::collections::HashSet;

use cc_core::{PermitId, Priority, SimTime};
use log::debug;

use crate::{OccupancySample, Permit, ResourceError, ResourceResult, WaitQueue};

/// Outcome of [`PriorityResource::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Capacity was free; the caller holds `Permit` from now on.
    Granted(Permit),
    /// The caller is suspended until a release hands it a permit.
    /// `enqueue_sequence` is its FIFO tie-break among equal priorities.
    Queued { enqueue_sequence: u64 },
}

/// A slot passed straight from a releasing holder to a queued waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handoff<W> {
    pub waiter: W,
    pub permit: Permit,
}

/// A fixed pool of interchangeable permits with priority admission.
///
/// # Protocol
///
/// 1. [`request`][Self::request] grants at once if `held < capacity`,
///    otherwise queues the waiter keyed by `(priority, enqueue_sequence)`.
/// 2. [`release`][Self::release] frees the slot; if anyone is queued, the
///    most urgent waiter receives a fresh permit immediately and `held` is
///    unchanged.  The caller is responsible for resuming that waiter.
///
/// No preemption: a queued request never evicts a holder, whatever its
/// priority.  `W` is the caller's handle for a waiting process.
///
/// # Invariants
///
/// - `held <= capacity`
/// - the wait queue is empty whenever `held < capacity`
/// - each issued permit is released at most once
pub struct PriorityResource<W> {
    capacity:       usize,
    held:           usize,
    wait_queue:     WaitQueue<W>,
    /// Permits issued and not yet released.
    active:         HashSet<PermitId>,
    next_permit:    u64,
    /// Append-only log of every change to `held`.
    samples:        Vec<OccupancySample>,
    grants_total:   u64,
}

impl<W> PriorityResource<W> {
    /// Create a resource with `capacity` permits, all free.
    pub fn new(capacity: usize) -> ResourceResult<Self> {
        if capacity == 0 {
            return Err(ResourceError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            held:         0,
            wait_queue:   WaitQueue::new(),
            active:       HashSet::with_capacity(capacity),
            next_permit:  0,
            samples:      Vec::new(),
            grants_total: 0,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of permits currently held (the occupancy).
    #[inline]
    pub fn held(&self) -> usize {
        self.held
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.held == self.capacity
    }

    pub fn queue_len(&self) -> usize {
        self.wait_queue.len()
    }

    /// Longest the wait queue has ever been.
    pub fn max_queue_len(&self) -> usize {
        self.wait_queue.max_len()
    }

    /// Priority of the next waiter to be granted, if any.
    pub fn next_waiting_priority(&self) -> Option<Priority> {
        self.wait_queue.peek().map(|r| r.priority)
    }

    /// Every occupancy change so far, in order.
    pub fn samples(&self) -> &[OccupancySample] {
        &self.samples
    }

    /// Total permits ever issued (immediate grants plus handoffs).
    pub fn grants_total(&self) -> u64 {
        self.grants_total
    }

    /// `true` if `permit` was issued by this resource and not yet released.
    pub fn is_active(&self, permit: &Permit) -> bool {
        self.active.contains(&permit.id)
    }

    /// Verify the structural invariants.  Returns a description of the first
    /// violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.held > self.capacity {
            return Err(format!("held {} exceeds capacity {}", self.held, self.capacity));
        }
        if self.held < self.capacity && !self.wait_queue.is_empty() {
            return Err(format!(
                "{} request(s) waiting while only {} of {} permits are held",
                self.wait_queue.len(),
                self.held,
                self.capacity,
            ));
        }
        if self.active.len() != self.held {
            return Err(format!(
                "{} active permits tracked but held = {}",
                self.active.len(),
                self.held,
            ));
        }
        Ok(())
    }

    // ── Protocol ──────────────────────────────────────────────────────────

    /// Ask for one permit at `priority` on behalf of `waiter`.
    pub fn request(&mut self, priority: Priority, waiter: W, now: SimTime) -> Admission {
        if self.held < self.capacity {
            self.held += 1;
            let permit = self.issue(priority);
            self.record(now);
            debug!("{now}: granted permit {} at priority {priority} ({}/{})",
                permit.id.0, self.held, self.capacity);
            return Admission::Granted(permit);
        }

        let enqueue_sequence = self.wait_queue.push(priority, waiter);
        debug!("{now}: queued request #{enqueue_sequence} at priority {priority} ({} waiting)",
            self.wait_queue.len());
        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Admission::Queued { enqueue_sequence }
    }

    /// Return `permit` to the pool.
    ///
    /// If a request is waiting, the freed slot goes straight to the most
    /// urgent one and its [`Handoff`] is returned; occupancy does not change
    /// and no sample is recorded.  Otherwise `held` drops by one.
    ///
    /// # Errors
    /// [`ResourceError::DoubleRelease`] if `permit` is not outstanding.
    pub fn release(&mut self, permit: Permit, now: SimTime) -> ResourceResult<Option<Handoff<W>>> {
        if !self.active.remove(&permit.id) {
            return Err(ResourceError::DoubleRelease(permit.id));
        }

        let handoff = match self.wait_queue.pop() {
            Some(next) => {
                let granted = self.issue(next.priority);
                debug!("{now}: permit {} released, handed to request #{} as permit {}",
                    permit.id.0, next.enqueue_sequence, granted.id.0);
                Some(Handoff { waiter: next.waiter, permit: granted })
            }
            None => {
                self.held -= 1;
                self.record(now);
                debug!("{now}: permit {} released ({}/{})", permit.id.0, self.held, self.capacity);
                None
            }
        };
        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Ok(handoff)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn issue(&mut self, priority: Priority) -> Permit {
        let id = PermitId(self.next_permit);
        self.next_permit += 1;
        self.grants_total += 1;
        self.active.insert(id);
        Permit { id, priority }
    }

    fn record(&mut self, now: SimTime) {
        self.samples.push(OccupancySample { time: now, held: self.held });
    }
}
