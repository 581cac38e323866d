//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cc_core::SimTime;
use cc_resource::OccupancySample;
use cc_sim::{CallRecord, SimObserver, SimReport};

use crate::row::{CallRow, OccupancyRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams occupancy changes and, at the end of the
/// run, every call record to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_occupancy(&mut self, sample: OccupancySample) {
        let result = self.writer.write_occupancy(&[OccupancyRow::from(sample)]);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, calls: &[CallRecord]) {
        let rows: Vec<CallRow> = calls.iter().map(CallRow::from).collect();
        let result = self.writer.write_calls(&rows).and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}

/// Write a finished report in one go (used for replications, which run
/// without an observer).
pub fn write_report<W: OutputWriter>(writer: &mut W, report: &SimReport) -> OutputResult<()> {
    let occupancy: Vec<OccupancyRow> = report.samples.iter().copied().map(OccupancyRow::from).collect();
    let calls: Vec<CallRow> = report.calls.iter().map(CallRow::from).collect();
    writer.write_occupancy(&occupancy)?;
    writer.write_calls(&calls)?;
    writer.finish()
}
