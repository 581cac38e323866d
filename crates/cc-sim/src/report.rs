//! End-of-run report and summary statistics.

use std::collections::BTreeMap;

use cc_core::{Priority, SimConfig, SimTime};
use cc_resource::OccupancySample;

use crate::CallRecord;

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub num_operators: usize,
    pub seed:          u64,
    /// Clock value when the run stopped (the horizon for a full run).
    pub final_time:    SimTime,
    /// Busy-operator count after every change, in time order.
    pub samples:       Vec<OccupancySample>,
    /// Busy-operator count seen by each arrival, before it requested.
    pub arrival_trace: Vec<OccupancySample>,
    /// Every spawned call, in arrival order.
    pub calls:         Vec<CallRecord>,
    pub summary:       SimSummary,
}

impl SimReport {
    pub fn new(
        config:        &SimConfig,
        final_time:    SimTime,
        samples:       Vec<OccupancySample>,
        arrival_trace: Vec<OccupancySample>,
        calls:         Vec<CallRecord>,
        max_queue_len: usize,
    ) -> Self {
        let summary = SimSummary::compute(
            &calls,
            &samples,
            config.num_operators,
            final_time,
            max_queue_len,
        );
        Self {
            num_operators: config.num_operators,
            seed: config.seed,
            final_time,
            samples,
            arrival_trace,
            calls,
            summary,
        }
    }

    /// Highest busy-operator count ever sampled.
    pub fn peak_occupancy(&self) -> usize {
        self.samples.iter().map(|s| s.held).max().unwrap_or(0)
    }
}

/// Mean wait of the served calls of one priority level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityWait {
    pub priority:  Priority,
    pub served:    usize,
    pub mean_wait: f64,
}

/// Aggregate counters over a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub arrived:          usize,
    /// Calls that reached an operator (including ones still in service).
    pub served:           usize,
    pub departed:         usize,
    /// Calls still queued at the end of the run.
    pub still_waiting:    usize,
    pub in_service:       usize,
    /// Mean queueing time of served calls, in minutes.  `0.0` if none.
    pub mean_wait:        f64,
    pub max_wait:         u64,
    /// Sorted most urgent first.
    pub wait_by_priority: Vec<PriorityWait>,
    pub max_queue_len:    usize,
    /// Busy operator-minutes over `num_operators * final_time`.
    pub utilisation:      f64,
}

impl SimSummary {
    pub fn compute(
        calls:         &[CallRecord],
        samples:       &[OccupancySample],
        num_operators: usize,
        final_time:    SimTime,
        max_queue_len: usize,
    ) -> Self {
        let arrived = calls.len();
        let served = calls.iter().filter(|c| c.is_served()).count();
        let departed = calls.iter().filter(|c| c.is_departed()).count();

        let waits: Vec<u64> = calls.iter().filter_map(CallRecord::wait_time).collect();
        let max_wait = waits.iter().copied().max().unwrap_or(0);

        let mut by_priority: BTreeMap<Priority, (usize, u64)> = BTreeMap::new();
        for call in calls {
            if let Some(wait) = call.wait_time() {
                let entry = by_priority.entry(call.priority).or_default();
                entry.0 += 1;
                entry.1 += wait;
            }
        }
        let wait_by_priority = by_priority
            .into_iter()
            .map(|(priority, (n, total))| PriorityWait {
                priority,
                served: n,
                mean_wait: mean(total, n),
            })
            .collect();

        let capacity_minutes = num_operators as u64 * final_time.0;
        let utilisation = if capacity_minutes == 0 {
            0.0
        } else {
            busy_minutes(samples, final_time) as f64 / capacity_minutes as f64
        };

        Self {
            arrived,
            served,
            departed,
            still_waiting: arrived - served,
            in_service:    served - departed,
            mean_wait:     mean(waits.iter().sum(), waits.len()),
            max_wait,
            wait_by_priority,
            max_queue_len,
            utilisation,
        }
    }
}

fn mean(total: u64, n: usize) -> f64 {
    if n == 0 { 0.0 } else { total as f64 / n as f64 }
}

/// Area under the occupancy step function on `[0, until]`.
fn busy_minutes(samples: &[OccupancySample], until: SimTime) -> u64 {
    let mut area = 0;
    let mut last = (SimTime::ZERO, 0usize);
    for sample in samples.iter().take_while(|s| s.time <= until) {
        area += (sample.time.0 - last.0.0) * last.1 as u64;
        last = (sample.time, sample.held);
    }
    area + (until.0 - last.0.0) * last.1 as u64
}
