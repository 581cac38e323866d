//! Occupancy samples consumed by plotting and output collaborators.

use cc_core::SimTime;

/// Number of held permits at `time`, recorded whenever that number changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancySample {
    pub time: SimTime,
    pub held: usize,
}
