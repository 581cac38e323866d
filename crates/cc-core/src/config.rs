//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to `cc_sim::SimBuilder`.  Every field has a
//! default equal to the classic call-center model: four operators, 14-minute
//! calls, a call roughly every two minutes, a 600-minute shift.

use crate::{CoreError, CoreResult, Priority, SimTime};

/// Handling time of one call, in minutes.
pub const DEFAULT_CALL_DURATION: u64 = 14;
/// Centre of the inter-arrival delay distribution, in minutes.
pub const DEFAULT_CALL_INTERVAL: u64 = 2;
/// Half-width of the inter-arrival delay distribution, in minutes.
pub const DEFAULT_INTERVAL_SPREAD: u64 = 2;
/// Smallest inter-arrival delay the generator will schedule.
pub const DEFAULT_MIN_INTERARRIVAL: u64 = 1;
/// Simulation horizon, in minutes.
pub const DEFAULT_SIM_TIME: u64 = 600;
pub const DEFAULT_NUM_OPERATORS: usize = 4;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Operator pool size (resource capacity).  Must be ≥ 1.
    pub num_operators: usize,

    /// Fixed handling duration of every call, in minutes.
    pub call_duration: u64,

    /// Centre of the inter-arrival distribution.  Delays are drawn uniformly
    /// from `[call_interval - interval_spread, call_interval + interval_spread]`.
    pub call_interval: u64,

    /// Half-width of the inter-arrival distribution.
    pub interval_spread: u64,

    /// Draws below this are clamped up to it.  Must be ≥ 1 so the generator
    /// always makes progress in simulated time.
    pub min_interarrival: u64,

    /// Simulated minutes to run.  Events at exactly the horizon still fire.
    pub horizon: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Priority levels the generator chooses between, uniformly.
    pub priorities: Vec<Priority>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_operators:    DEFAULT_NUM_OPERATORS,
            call_duration:    DEFAULT_CALL_DURATION,
            call_interval:    DEFAULT_CALL_INTERVAL,
            interval_spread:  DEFAULT_INTERVAL_SPREAD,
            min_interarrival: DEFAULT_MIN_INTERARRIVAL,
            horizon:          DEFAULT_SIM_TIME,
            seed:             DEFAULT_SEED,
            priorities:       Priority::DEFAULT_LEVELS.to_vec(),
        }
    }
}

impl SimConfig {
    /// The time at which the run stops (inclusive).
    #[inline]
    pub fn end_time(&self) -> SimTime {
        SimTime(self.horizon)
    }

    /// Inclusive `(lo, hi)` bounds of the raw inter-arrival draw, before
    /// clamping.  `lo` may be zero or negative.
    pub fn interarrival_bounds(&self) -> (i64, i64) {
        let centre = self.call_interval as i64;
        let spread = self.interval_spread as i64;
        (centre - spread, centre + spread)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_operators == 0 {
            return Err(CoreError::Config("num_operators must be at least 1".into()));
        }
        if self.min_interarrival == 0 {
            return Err(CoreError::Config("min_interarrival must be at least 1".into()));
        }
        if self.priorities.is_empty() {
            return Err(CoreError::Config("priorities must not be empty".into()));
        }
        if self.call_interval > i64::MAX as u64 / 2 || self.interval_spread > i64::MAX as u64 / 2 {
            return Err(CoreError::Config("call_interval / interval_spread out of range".into()));
        }
        Ok(())
    }
}
