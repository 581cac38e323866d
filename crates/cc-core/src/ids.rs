//! Identifier newtypes for calls and operator permits.
//!
//! Call ids are handed out densely from zero in arrival order, so
//! `id.index()` addresses the simulator's per-call `Vec`.

use std::fmt;

/// Identifier of one simulated call, assigned in arrival order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CallId(pub u32);

impl CallId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CallId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(CallId)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call {}", self.0)
    }
}

/// Identifier of one operator permit issued by a priority resource.
///
/// Unique for the lifetime of the resource; never reused after release.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PermitId(pub u64);

impl fmt::Display for PermitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permit {}", self.0)
    }
}
