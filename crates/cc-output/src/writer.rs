//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CallRow, OccupancyRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Append occupancy samples.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Append call records.
    fn write_calls(&mut self, rows: &[CallRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        (**self).write_occupancy(rows)
    }

    fn write_calls(&mut self, rows: &[CallRow]) -> OutputResult<()> {
        (**self).write_calls(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
