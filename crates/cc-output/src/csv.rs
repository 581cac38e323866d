//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `occupancy.csv`
//! - `calls.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CallRow, OccupancyRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    occupancy: Writer<File>,
    calls:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(["time", "busy_operators"])?;

        let mut calls = Writer::from_path(dir.join("calls.csv"))?;
        calls.write_record([
            "call_id",
            "priority",
            "arrival_time",
            "service_start_time",
            "departure_time",
            "wait_time",
        ])?;

        Ok(Self { occupancy, calls, finished: false })
    }
}

/// Missing values are written as empty fields.
fn opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[row.time.to_string(), row.busy_operators.to_string()])?;
        }
        Ok(())
    }

    fn write_calls(&mut self, rows: &[CallRow]) -> OutputResult<()> {
        for row in rows {
            self.calls.write_record(&[
                row.call_id.to_string(),
                row.priority.to_string(),
                row.arrival_time.to_string(),
                opt(row.service_start_time),
                opt(row.departure_time),
                opt(row.wait_time),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.occupancy.flush()?;
        self.calls.flush()?;
        Ok(())
    }
}
