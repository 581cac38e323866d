//! `cc-output` — simulation output writers for the call-center simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                    |
//! |-----------|-------------|----------------------------------|
//! | *(none)*  | CSV         | `occupancy.csv`, `calls.csv`     |
//! | `sqlite`  | SQLite      | `output.db`                      |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `cc_sim::SimObserver`, or by [`write_report`] for a
//! finished [`SimReport`][cc_sim::SimReport].
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{SimOutputObserver, write_report};
pub use row::{CallRow, OccupancyRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
