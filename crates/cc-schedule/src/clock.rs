//! `SimClock` — simulated time plus the pending-event queue.

use cc_core::SimTime;
use log::trace;

use crate::{EventQueue, ScheduleError, ScheduleResult, ScheduledEvent};

/// The discrete-event scheduler for one simulation run.
///
/// `now` never decreases.  Actions are opaque to the clock; the driver passes
/// a handler to [`run`][Self::run] that interprets them and may schedule
/// further events through the `&mut SimClock` it receives.
pub struct SimClock<A> {
    now:   SimTime,
    queue: EventQueue<A>,
    fired: u64,
}

impl<A> Default for SimClock<A> {
    fn default() -> Self {
        Self { now: SimTime::ZERO, queue: EventQueue::new(), fired: 0 }
    }
}

impl<A> SimClock<A> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Time of the next pending event, if any.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.queue.next_time()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of events dispatched so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Schedule `action` to fire `delay` minutes from now.
    ///
    /// Returns the `(time, sequence)` key of the new event.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidDelay`] if `delay < 0` or `now + delay`
    /// overflows.
    pub fn schedule(&mut self, delay: i64, action: A) -> ScheduleResult<(SimTime, u64)> {
        let time = self
            .now
            .checked_delay(delay)
            .ok_or(ScheduleError::InvalidDelay { delay, now: self.now })?;
        let sequence = self.queue.push(time, action);
        Ok((time, sequence))
    }

    /// Pop the next event if its time is `<= until`, advancing `now` to it.
    ///
    /// Returns `Ok(None)` when the queue is empty or the next event lies
    /// beyond `until`; the event then stays queued.
    ///
    /// # Errors
    /// [`ScheduleError::CausalityViolation`] if the popped event is earlier
    /// than `now`.  `schedule` cannot produce such an event, so this signals a
    /// scheduler bug.
    pub fn pop_next(&mut self, until: SimTime) -> ScheduleResult<Option<ScheduledEvent<A>>> {
        match self.queue.next_time() {
            None                    => return Ok(None),
            Some(t) if t > until    => return Ok(None),
            Some(_)                 => {}
        }
        let Some(event) = self.queue.pop() else {
            return Ok(None);
        };
        if event.time < self.now {
            return Err(ScheduleError::CausalityViolation {
                now:        self.now,
                event_time: event.time,
                sequence:   event.sequence,
            });
        }
        self.now = event.time;
        self.fired += 1;
        trace!("dispatch event #{} at {}", event.sequence, event.time);
        Ok(Some(event))
    }

    /// Dispatch events in `(time, sequence)` order until the queue is empty
    /// or the next event lies beyond `until`.
    ///
    /// `handler` receives the clock itself so actions can schedule follow-up
    /// events.  The first error from either the clock or the handler aborts
    /// the run.  On normal return `now` is at least `until`.
    pub fn run<E, F>(&mut self, until: SimTime, mut handler: F) -> Result<(), E>
    where
        E: From<ScheduleError>,
        F: FnMut(&mut Self, A) -> Result<(), E>,
    {
        while let Some(event) = self.pop_next(until)? {
            handler(self, event.action)?;
        }
        if self.now < until {
            self.now = until;
        }
        Ok(())
    }

    /// Move `now` without dispatching.  Test-only: lets tests put the clock
    /// ahead of a queued event.
    #[cfg(test)]
    pub(crate) fn force_now(&mut self, now: SimTime) {
        self.now = now;
    }
}
