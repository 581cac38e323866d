//! `cc-resource` — the operator pool: a finite-capacity resource with
//! priority-ordered admission.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`resource`]   | `PriorityResource`, `Admission`, `Handoff`             |
//! | [`wait_queue`] | `WaitQueue`, `Request` keyed by `(priority, sequence)` |
//! | [`permit`]     | `Permit`                                               |
//! | [`sample`]     | `OccupancySample`                                      |
//! | [`error`]      | `ResourceError`, `ResourceResult<T>`                   |
//!
//! The resource knows nothing about clocks or processes: callers pass the
//! current time into `request`/`release` and resume whichever waiter a
//! release hands a permit to.

pub mod error;
pub mod permit;
pub mod resource;
pub mod sample;
pub mod wait_queue;


pub use error::{ResourceError, ResourceResult};
pub use permit::Permit;
pub use resource::{Admission, Handoff, PriorityResource};
pub use sample::OccupancySample;
pub use wait_queue::{Request, WaitQueue};
