//! Plain data row types written by output backends.

use cc_resource::OccupancySample;
use cc_sim::CallRecord;

/// Busy-operator count after one change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyRow {
    pub time:           u64,
    pub busy_operators: u64,
}

impl From<OccupancySample> for OccupancyRow {
    fn from(sample: OccupancySample) -> Self {
        Self { time: sample.time.0, busy_operators: sample.held as u64 }
    }
}

/// One call's timestamps.  `None` columns mean the call had not reached that
/// point when the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRow {
    pub call_id:            u32,
    pub priority:           u32,
    pub arrival_time:       u64,
    pub service_start_time: Option<u64>,
    pub departure_time:     Option<u64>,
    pub wait_time:          Option<u64>,
}

impl From<&CallRecord> for CallRow {
    fn from(call: &CallRecord) -> Self {
        Self {
            call_id:            call.id.0,
            priority:           call.priority.0,
            arrival_time:       call.arrival_time.0,
            service_start_time: call.service_start_time.map(|t| t.0),
            departure_time:     call.departure_time.map(|t| t.0),
            wait_time:          call.wait_time(),
        }
    }
}
