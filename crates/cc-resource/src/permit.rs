//! Permits handed out by [`PriorityResource`][crate::PriorityResource].

use cc_core::{PermitId, Priority};

/// A claim on one unit of resource capacity.
///
/// `Permit` is a plain `Copy` handle: the resource, not the type system,
/// tracks which permits are outstanding, so releasing a copy of an
/// already-released permit is detected and reported as
/// [`ResourceError::DoubleRelease`][crate::ResourceError::DoubleRelease].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permit {
    pub id:       PermitId,
    /// Priority of the request this permit satisfied.
    pub priority: Priority,
}
