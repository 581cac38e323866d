//! One call's lifecycle as an explicit state machine.
//!
//! ```text
//! Created ──arrive──▶ Waiting ──begin_service──▶ InService ──depart──▶ Departed
//! ```
//!
//! The process never blocks by itself.  "Suspension" means the call sits in
//! `Waiting` with no event of its own queued; the driver resumes it when the
//! operator pool hands it a permit.

use cc_core::{CallId, Priority, SimTime};
use cc_resource::Permit;

use crate::{SimError, SimResult};

/// Where a call is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CallState {
    Created,
    Waiting,
    InService,
    Departed,
}

/// Timestamps of one call.  Filled in as the call progresses and read-only
/// once it departs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRecord {
    pub id:                 CallId,
    pub priority:           Priority,
    pub arrival_time:       SimTime,
    pub service_start_time: Option<SimTime>,
    pub departure_time:     Option<SimTime>,
}

impl CallRecord {
    /// Minutes spent queued, once service has started.
    pub fn wait_time(&self) -> Option<u64> {
        self.service_start_time.map(|s| s - self.arrival_time)
    }

    /// Minutes spent with an operator, once the call has departed.
    pub fn service_time(&self) -> Option<u64> {
        match (self.service_start_time, self.departure_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    pub fn is_served(&self) -> bool {
        self.service_start_time.is_some()
    }

    pub fn is_departed(&self) -> bool {
        self.departure_time.is_some()
    }
}

/// A call process: its record, its state, and the permit it holds while in
/// service.
#[derive(Debug)]
pub struct CallProcess {
    record: CallRecord,
    state:  CallState,
    permit: Option<Permit>,
}

impl CallProcess {
    pub fn new(id: CallId, priority: Priority, spawned_at: SimTime) -> Self {
        Self {
            record: CallRecord {
                id,
                priority,
                arrival_time:       spawned_at,
                service_start_time: None,
                departure_time:     None,
            },
            state:  CallState::Created,
            permit: None,
        }
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.record.priority
    }

    #[inline]
    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn record(&self) -> &CallRecord {
        &self.record
    }

    /// `Created → Waiting`: the call reaches the queue at `now`.
    pub fn arrive(&mut self, now: SimTime) -> SimResult<()> {
        self.expect(CallState::Created, "arrive")?;
        self.record.arrival_time = now;
        self.state = CallState::Waiting;
        Ok(())
    }

    /// `Waiting → InService`: an operator permit was granted at `now`.
    pub fn begin_service(&mut self, now: SimTime, permit: Permit) -> SimResult<()> {
        self.expect(CallState::Waiting, "begin service")?;
        self.record.service_start_time = Some(now);
        self.permit = Some(permit);
        self.state = CallState::InService;
        Ok(())
    }

    /// `InService → Departed`: handling finished at `now`.  Returns the
    /// permit so the caller can release it; the process keeps no copy.
    pub fn depart(&mut self, now: SimTime) -> SimResult<Permit> {
        self.expect(CallState::InService, "depart")?;
        let permit = self.permit.take().ok_or(SimError::InvalidTransition {
            call:  self.record.id,
            state: self.state,
            event: "release a permit it does not hold",
        })?;
        self.record.departure_time = Some(now);
        self.state = CallState::Departed;
        Ok(permit)
    }

    fn expect(&self, state: CallState, event: &'static str) -> SimResult<()> {
        if self.state == state {
            Ok(())
        } else {
            Err(SimError::InvalidTransition { call: self.record.id, state: self.state, event })
        }
    }
}
