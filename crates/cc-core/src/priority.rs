//! Call priority shared by the resource queue and the arrival generator.

use std::fmt;

/// Admission priority of a request.  **Lower values are more urgent.**
///
/// The default generator draws from `{0, 1, 2}` (high, medium, low), but any
/// `u32` is accepted; the wait queue only relies on the ordering.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Priority(pub u32);

impl Priority {
    pub const HIGH:   Priority = Priority(0);
    pub const MEDIUM: Priority = Priority(1);
    pub const LOW:    Priority = Priority(2);

    /// The three levels drawn by the default arrival generator.
    pub const DEFAULT_LEVELS: [Priority; 3] = [Self::HIGH, Self::MEDIUM, Self::LOW];

    /// `true` if `self` would be admitted ahead of `other`.
    #[inline]
    pub fn is_more_urgent_than(self, other: Priority) -> bool {
        self.0 < other.0
    }

    /// Human-readable label for the default levels; `None` for custom values.
    pub fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("high"),
            1 => Some("medium"),
            2 => Some("low"),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} ({label})", self.0),
            None        => write!(f, "{}", self.0),
        }
    }
}
