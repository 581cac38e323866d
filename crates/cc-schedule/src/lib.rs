//! `cc-schedule` — the discrete-event clock for the call-center simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`event_queue`] | `ScheduledEvent`, `EventQueue` (`BinaryHeap` min-queue) |
//! | [`clock`]       | `SimClock` — `now`, `schedule`, `pop_next`, `run`       |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Event model (summary)
//!
//! ```text
//! schedule(delay, action)  → event at now + delay, sequence = next counter
//! run(until, handler)      → loop:
//!                              pop min (time, sequence) with time <= until
//!                              now = time
//!                              handler(clock, action)   // may schedule more
//! ```
//!
//! Equal-time events fire in insertion order.  The clock is single-threaded:
//! exactly one action runs at a time.

pub mod clock;
pub mod error;
pub mod event_queue;


pub use clock::SimClock;
pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{EventQueue, ScheduledEvent};
