//! `cc-sim` — event-loop driver for the call-center simulator.
//!
//! # Process model
//!
//! ```text
//! arrival generator (one long-lived process):
//!   loop { wait uniform delay (>= min_interarrival); draw priority; spawn call }
//!
//! call process (one per call):
//!   Start    — record arrival, request an operator at the call's priority
//!   (wait)   — suspended in the resource's wait queue until handed a permit
//!   Service  — record service start, hold the operator for call_duration
//!   Complete — record departure, release; the release may hand the operator
//!              straight to the most urgent waiter (Resume at delay 0)
//! ```
//!
//! Every continuation is an [`Action`] event on the shared
//! [`SimClock`][cc_schedule::SimClock]; nothing blocks.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `run_replications` runs seeds on Rayon's thread pool.     |
//! | `serde`    | `Serialize`/`Deserialize` for reports and call records.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_core::SimConfig;
//! use cc_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{} calls served", report.summary.served);
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod process;
pub mod report;
pub mod runner;
pub mod sim;

#[cfg(test)]
mod tests;

pub use arrivals::{ArrivalGenerator, ArrivalSource, ScriptedArrival};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use process::{CallProcess, CallRecord, CallState};
pub use report::{PriorityWait, SimReport, SimSummary};
pub use runner::{replication_seeds, run_config, run_replications, simulate};
pub use sim::{Action, CallCenter, Sim};
