//! Where calls come from: the random arrival generator, or a fixed script.

use cc_core::{Priority, RandomSource, SimConfig, SimTime};

/// The unbounded arrival process.
///
/// Each cycle draws an inter-arrival delay uniformly from
/// `[call_interval - spread, call_interval + spread]`, clamps it up to
/// `min_interarrival`, and waits that long; when the wait fires it draws a
/// priority from the configured levels and spawns a call.  Draw order per
/// cycle is therefore: delay, then priority.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    lo:         i64,
    hi:         i64,
    min_delay:  i64,
    priorities: Vec<Priority>,
}

impl ArrivalGenerator {
    pub fn from_config(config: &SimConfig) -> Self {
        let (lo, hi) = config.interarrival_bounds();
        Self {
            lo,
            hi,
            min_delay:  config.min_interarrival as i64,
            priorities: config.priorities.clone(),
        }
    }

    /// Minutes until the next arrival.  Always `>= min_interarrival`.
    pub fn draw_delay<R: RandomSource>(&self, rng: &mut R) -> i64 {
        rng.uniform_int(self.lo, self.hi).max(self.min_delay)
    }

    /// Priority of the call about to be spawned.  `None` only if the
    /// generator has no levels, which config validation rules out.
    pub fn draw_priority<R: RandomSource>(&self, rng: &mut R) -> Option<Priority> {
        rng.choice(&self.priorities).copied()
    }
}

/// One pre-determined arrival, for reproducing a hand-written scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedArrival {
    pub at:       SimTime,
    pub priority: Priority,
}

impl ScriptedArrival {
    pub fn new(at: u64, priority: u32) -> Self {
        Self { at: SimTime(at), priority: Priority(priority) }
    }
}

/// How a [`Sim`][crate::Sim] produces calls.
#[derive(Debug, Clone)]
pub enum ArrivalSource {
    /// Random arrivals driven by the simulation RNG.
    Random(ArrivalGenerator),
    /// Exactly these arrivals, queued at build time; the RNG is never used.
    Scripted(Vec<ScriptedArrival>),
}
