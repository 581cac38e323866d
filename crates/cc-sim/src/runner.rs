//! One-call entry points: a single default run, or many seeded replications.

use cc_core::{SimConfig, SimRng};
use log::info;

use crate::{NoopObserver, SimBuilder, SimReport, SimResult};

/// Run the classic model (default durations and arrival rates) with the given
/// operator count, horizon and seed.
pub fn simulate(num_operators: usize, horizon: u64, seed: u64) -> SimResult<SimReport> {
    let config = SimConfig { num_operators, horizon, seed, ..SimConfig::default() };
    run_config(&config)
}

/// Build and run `config` without an observer.
pub fn run_config(config: &SimConfig) -> SimResult<SimReport> {
    SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)
}

/// Run one independent replication of `config` per seed.
///
/// Each replication owns its clock, resource and RNG, so the reports are the
/// same (and in the same order) whether or not the `parallel` feature is on.
pub fn run_replications(config: &SimConfig, seeds: &[u64]) -> SimResult<Vec<SimReport>> {
    info!("Running {} replications.", seeds.len());
    let run_one = |&seed: &u64| run_config(&SimConfig { seed, ..config.clone() });

    #[cfg(feature = "parallel")]
    let reports = {
        use rayon::prelude::*;
        seeds.par_iter().map(run_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let reports = seeds.iter().map(run_one).collect();

    reports
}

/// `count` replication seeds derived from `master`; the first is `master`
/// itself.
pub fn replication_seeds(master: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| SimRng::child_seed(master, i)).collect()
}
