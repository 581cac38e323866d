//! Integration tests for cc-sim.

use std::sync::{Arc, Mutex};

use cc_core::{CallId, Priority, RandomSource, SimConfig, SimTime};
use cc_resource::OccupancySample;

use crate::{
    CallProcess, CallRecord, CallState, NoopObserver, ScriptedArrival, SimBuilder, SimError,
    SimObserver, SimReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(num_operators: usize, horizon: u64) -> SimConfig {
    SimConfig { num_operators, horizon, ..SimConfig::default() }
}

/// Run a scripted scenario of `(time, priority)` arrivals.
fn scripted(num_operators: usize, horizon: u64, arrivals: &[(u64, u32)]) -> SimReport {
    let arrivals = arrivals.iter().map(|&(t, p)| ScriptedArrival::new(t, p)).collect();
    SimBuilder::new(test_config(num_operators, horizon))
        .scripted_arrivals(arrivals)
        .build()
        .unwrap()
        .run(&mut NoopObserver)
        .unwrap()
}

fn call(report: &SimReport, id: u32) -> &CallRecord {
    &report.calls[CallId(id).index()]
}

/// Always draws the lower bound and the first level.
struct LowestDraw;

impl RandomSource for LowestDraw {
    fn uniform_int(&mut self, lo: i64, _hi: i64) -> i64 {
        lo
    }

    fn choice<'a, T>(&mut self, set: &'a [T]) -> Option<&'a T> {
        set.first()
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.center.operators().capacity(), 4);
        assert_eq!(sim.now(), SimTime::ZERO);
        assert_eq!(sim.clock.len(), 1, "first arrival queued");
    }

    #[test]
    fn zero_operators_rejected() {
        let result = SimBuilder::new(test_config(0, 10)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_priorities_rejected() {
        let config = SimConfig { priorities: Vec::new(), ..SimConfig::default() };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn zero_min_interarrival_rejected() {
        let config = SimConfig { min_interarrival: 0, ..SimConfig::default() };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn scripted_arrivals_all_queued_up_front() {
        let sim = SimBuilder::new(test_config(1, 50))
            .scripted_arrivals(vec![ScriptedArrival::new(5, 0), ScriptedArrival::new(2, 1)])
            .build()
            .unwrap();
        assert_eq!(sim.clock.len(), 2);
        assert_eq!(sim.clock.peek_time(), Some(SimTime(2)));
    }
}

// ── Call process state machine ────────────────────────────────────────────────

#[cfg(test)]
mod process_tests {
    use super::*;

    #[test]
    fn depart_before_service_is_rejected() {
        let mut p = CallProcess::new(CallId(3), Priority::LOW, SimTime(0));
        let err = p.depart(SimTime(1)).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidTransition { call: CallId(3), state: CallState::Created, .. }
        ));
        assert_eq!(p.state(), CallState::Created);
    }

    #[test]
    fn arrive_twice_is_rejected() {
        let mut p = CallProcess::new(CallId(0), Priority::HIGH, SimTime(0));
        p.arrive(SimTime(0)).unwrap();
        assert!(p.arrive(SimTime(1)).is_err());
        assert_eq!(p.state(), CallState::Waiting);
    }
}

// ── Priority scheduling ───────────────────────────────────────────────────────

#[cfg(test)]
mod priority_tests {
    use super::*;

    #[test]
    fn second_call_waits_for_single_operator() {
        let r = scripted(1, 100, &[(0, 1), (1, 0)]);
        assert_eq!(call(&r, 0).service_start_time, Some(SimTime(0)));
        assert_eq!(call(&r, 0).departure_time, Some(SimTime(14)));
        assert_eq!(call(&r, 1).arrival_time, SimTime(1));
        assert_eq!(call(&r, 1).service_start_time, Some(SimTime(14)));
        assert_eq!(call(&r, 1).departure_time, Some(SimTime(28)));
    }

    #[test]
    fn urgent_call_overtakes_earlier_low_priority_call() {
        let r = scripted(1, 100, &[(0, 1), (1, 2), (2, 0)]);
        // Call 2 (priority 0) arrived last but is served first.
        assert_eq!(call(&r, 2).service_start_time, Some(SimTime(14)));
        assert_eq!(call(&r, 1).service_start_time, Some(SimTime(28)));
        assert_eq!(call(&r, 1).departure_time, Some(SimTime(42)));
    }

    #[test]
    fn equal_priority_served_in_arrival_order() {
        let r = scripted(1, 100, &[(0, 0), (1, 1), (1, 1), (2, 1)]);
        let starts: Vec<_> = (1..4).map(|i| call(&r, i).service_start_time).collect();
        assert_eq!(starts, [Some(SimTime(14)), Some(SimTime(28)), Some(SimTime(42))]);
    }
}

// ── Run semantics ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn service_time_is_constant() {
        let r = SimBuilder::new(SimConfig::default()).build().unwrap().run(&mut NoopObserver).unwrap();
        assert!(r.summary.departed > 0);
        for c in r.calls.iter().filter(|c| c.is_departed()) {
            assert_eq!(c.service_time(), Some(14), "{c:?}");
            assert!(c.service_start_time.unwrap() >= c.arrival_time);
        }
    }

    #[test]
    fn occupancy_never_exceeds_operators() {
        let r = SimBuilder::new(SimConfig::default()).build().unwrap().run(&mut NoopObserver).unwrap();
        assert!(r.samples.iter().all(|s| s.held <= 4));
        assert_eq!(r.peak_occupancy(), 4, "default load saturates all operators");
        assert!(r.samples.windows(2).all(|w| w[0].held != w[1].held && w[0].time <= w[1].time));
    }

    #[test]
    fn no_waiter_left_behind() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let r = sim.run(&mut NoopObserver).unwrap();
        let operators = sim.center.operators();
        assert_eq!(r.summary.still_waiting, operators.queue_len());
        assert_eq!(r.summary.in_service, operators.held());
        operators.check_invariants().unwrap();
    }

    #[test]
    fn random_load_drains_once_arrivals_stop() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        sim.run_until(SimTime(600), &mut NoopObserver).unwrap();
        let arrived = sim.center.calls().len() as u64;
        assert!(arrived > 0);

        sim.center.generator = None;
        sim.run_until(SimTime(600 + 14 * arrived), &mut NoopObserver).unwrap();

        let r = sim.report();
        assert_eq!(r.calls.len() as u64, arrived, "no arrivals after the generator stops");
        assert!(r.calls.iter().all(|c| c.is_departed()), "every call departs");
        assert!(r.calls.iter().all(|c| c.service_time() == Some(14)));
        assert_eq!(r.samples.last().map(|s| s.held), Some(0));
        assert_eq!(sim.center.operators().queue_len(), 0);
        assert_eq!(sim.center.operators().held(), 0);
        sim.center.operators().check_invariants().unwrap();
    }

    #[test]
    fn scripted_backlog_fully_drains() {
        let r = scripted(2, 1_000, &[(0, 0); 10]);
        assert_eq!(r.summary.departed, 10);
        assert_eq!(r.calls.iter().filter_map(|c| c.departure_time).max(), Some(SimTime(70)));
        assert_eq!(r.samples.last(), Some(&OccupancySample { time: SimTime(70), held: 0 }));
    }

    #[test]
    fn event_at_horizon_fires() {
        let r = scripted(1, 10, &[(10, 0)]);
        assert_eq!(r.final_time, SimTime(10));
        assert_eq!(call(&r, 0).service_start_time, Some(SimTime(10)));
        assert_eq!(call(&r, 0).departure_time, None);
        assert_eq!(r.summary.in_service, 1);
    }

    #[test]
    fn idle_run_still_reaches_horizon() {
        let r = scripted(1, 30, &[]);
        assert_eq!(r.final_time, SimTime(30));
        assert!(r.calls.is_empty());
        assert_eq!(r.summary.utilisation, 0.0);
    }

    #[test]
    fn small_draws_clamped_to_min_interarrival() {
        // call_interval 2 ± 2 gives lo = 0, which clamps to 1.
        let mut sim = SimBuilder::new(test_config(4, 5)).rng(LowestDraw).build().unwrap();
        let r = sim.run(&mut NoopObserver).unwrap();
        let arrivals: Vec<_> = r.calls.iter().map(|c| c.arrival_time.0).collect();
        assert_eq!(arrivals, [1, 2, 3, 4, 5]);
        assert!(r.calls.iter().all(|c| c.priority == Priority::HIGH));
    }

    #[test]
    fn arrival_trace_sees_occupancy_before_request() {
        let r = scripted(1, 100, &[(0, 0), (1, 0), (20, 0)]);
        let seen: Vec<_> = r.arrival_trace.iter().map(|s| (s.time.0, s.held)).collect();
        assert_eq!(seen, [(0, 0), (1, 1), (20, 1)]);
    }

    #[test]
    fn run_until_then_run_matches_single_run() {
        let mut stepped = SimBuilder::new(test_config(3, 200)).build().unwrap();
        stepped.run_until(SimTime(50), &mut NoopObserver).unwrap();
        assert_eq!(stepped.now(), SimTime(50));
        let a = stepped.run(&mut NoopObserver).unwrap();

        let b = SimBuilder::new(test_config(3, 200)).build().unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }
}

// ── Determinism and replications ──────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;
    use crate::{replication_seeds, run_config, run_replications, simulate};

    #[test]
    fn same_seed_same_run() {
        let a = simulate(4, 600, 42).unwrap();
        let b = simulate(4, 600, 42).unwrap();
        assert_eq!(a.calls, b.calls);
        assert_eq!(a.samples, b.samples);
        assert_eq!(a, run_config(&SimConfig::default()).unwrap());
    }

    #[test]
    fn different_seed_different_run() {
        let a = simulate(4, 600, 1).unwrap();
        let b = simulate(4, 600, 2).unwrap();
        assert_ne!(a.calls, b.calls);
    }

    #[test]
    fn replications_match_individual_runs() {
        let config = test_config(2, 120);
        let seeds = replication_seeds(9, 3);
        assert_eq!(seeds[0], 9);
        let reports = run_replications(&config, &seeds).unwrap();
        assert_eq!(reports.len(), 3);
        for (report, &seed) in reports.iter().zip(&seeds) {
            assert_eq!(report.seed, seed);
            assert_eq!(report, &run_config(&SimConfig { seed, ..config.clone() }).unwrap());
        }
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn two_call_summary() {
        let r = scripted(1, 100, &[(0, 1), (1, 0)]);
        let s = &r.summary;
        assert_eq!((s.arrived, s.served, s.departed), (2, 2, 2));
        assert_eq!((s.still_waiting, s.in_service), (0, 0));
        assert_eq!(s.mean_wait, 6.5);
        assert_eq!(s.max_wait, 13);
        assert_eq!(s.max_queue_len, 1);
        // One operator busy from 0 to 28 out of 100 minutes.
        assert!((s.utilisation - 0.28).abs() < 1e-12);

        let levels: Vec<_> = s.wait_by_priority.iter().map(|w| (w.priority.0, w.served)).collect();
        assert_eq!(levels, [(0, 1), (1, 1)]);
        assert_eq!(s.wait_by_priority[0].mean_wait, 13.0);
    }

    #[test]
    fn waiting_calls_counted() {
        let r = scripted(1, 20, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(r.summary.served, 2);
        assert_eq!(r.summary.still_waiting, 1);
        assert_eq!(r.summary.in_service, 1);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Counts {
        arrived:  usize,
        started:  usize,
        departed: usize,
        samples:  Vec<OccupancySample>,
        ended:    Option<(SimTime, usize)>,
    }

    struct Recorder(Arc<Mutex<Counts>>);

    impl SimObserver for Recorder {
        fn on_call_arrived(&mut self, _c: &CallRecord) { self.0.lock().unwrap().arrived += 1; }
        fn on_service_start(&mut self, _c: &CallRecord) { self.0.lock().unwrap().started += 1; }
        fn on_call_departed(&mut self, _c: &CallRecord) { self.0.lock().unwrap().departed += 1; }
        fn on_occupancy(&mut self, s: OccupancySample) { self.0.lock().unwrap().samples.push(s); }
        fn on_sim_end(&mut self, t: SimTime, calls: &[CallRecord]) {
            self.0.lock().unwrap().ended = Some((t, calls.len()));
        }
    }

    #[test]
    fn callbacks_follow_lifecycle() {
        let counts = Arc::new(Mutex::new(Counts::default()));
        let mut sim = SimBuilder::new(test_config(1, 100))
            .scripted_arrivals(vec![ScriptedArrival::new(0, 1), ScriptedArrival::new(1, 0)])
            .build()
            .unwrap();
        let report = sim.run(&mut Recorder(Arc::clone(&counts))).unwrap();

        let c = counts.lock().unwrap();
        assert_eq!((c.arrived, c.started, c.departed), (2, 2, 2));
        assert_eq!(c.samples, report.samples);
        assert_eq!(c.ended, Some((SimTime(100), 2)));
    }
}
