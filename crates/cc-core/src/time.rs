//! Simulation time model.
//!
//! # Design
//!
//! Time is an absolute count of simulated minutes held in `SimTime`.  Every
//! delay in the call-center model (handling duration, inter-arrival draws) is
//! a whole number of minutes, so using an integer as the canonical time unit
//! keeps event ordering exact: two events scheduled for "the same time" really
//! compare equal, and the insertion-sequence tie-break decides between them.
//!
//! Delays handed to the scheduler are signed (`i64`) so that a negative delay
//! is representable and can be rejected rather than silently wrapping.

use std::fmt;

/// An absolute simulation time in minutes since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Apply a signed delay.  Returns `None` for negative delays or overflow.
    #[inline]
    pub fn checked_delay(self, delay: i64) -> Option<SimTime> {
        let delay = u64::try_from(delay).ok()?;
        self.0.checked_add(delay).map(SimTime)
    }
}

/// Minutes elapsed between two times; `self` must not precede `rhs`.
impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
