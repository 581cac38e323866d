//! Simulation observer trait for progress reporting and data collection.

use cc_core::SimTime;
use cc_resource::OccupancySample;

use crate::CallRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as calls move through
/// their lifecycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — occupancy printer
///
/// ```rust,ignore
/// struct OccupancyPrinter;
///
/// impl SimObserver for OccupancyPrinter {
///     fn on_occupancy(&mut self, sample: OccupancySample) {
///         println!("{}: {} operators busy", sample.time, sample.held);
///     }
/// }
/// ```
pub trait SimObserver {
    /// A call entered the queue (`Created → Waiting`).
    fn on_call_arrived(&mut self, _call: &CallRecord) {}

    /// A call was given an operator (`Waiting → InService`).
    fn on_service_start(&mut self, _call: &CallRecord) {}

    /// A call finished and released its operator (`InService → Departed`).
    fn on_call_departed(&mut self, _call: &CallRecord) {}

    /// The number of busy operators changed.
    fn on_occupancy(&mut self, _sample: OccupancySample) {}

    /// Called once when the clock reaches the horizon.
    ///
    /// `calls` holds every call spawned during the run, including ones still
    /// waiting or in service.
    fn on_sim_end(&mut self, _final_time: SimTime, _calls: &[CallRecord]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
