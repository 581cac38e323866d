//! `cc-core` — foundational types for the call-center simulator.
//!
//! This crate is a dependency of every other `cc-*` crate.  It intentionally
//! has no `cc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CallId`, `PermitId`                                  |
//! | [`priority`]    | `Priority` (lower value = more urgent)                |
//! | [`time`]        | `SimTime`                                             |
//! | [`config`]      | `SimConfig` and the default model constants           |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod priority;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    SimConfig, DEFAULT_CALL_DURATION, DEFAULT_CALL_INTERVAL, DEFAULT_INTERVAL_SPREAD,
    DEFAULT_MIN_INTERARRIVAL, DEFAULT_NUM_OPERATORS, DEFAULT_SEED, DEFAULT_SIM_TIME,
};
pub use error::{CoreError, CoreResult};
pub use ids::{CallId, PermitId};
pub use priority::Priority;
pub use rng::{RandomSource, SimRng};
pub use time::SimTime;
