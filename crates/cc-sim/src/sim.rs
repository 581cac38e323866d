//! The `Sim` struct and its event loop.

use cc_core::{CallId, CoreError, Priority, RandomSource, SimConfig, SimRng, SimTime};
use cc_resource::{Admission, Handoff, OccupancySample, Permit, PriorityResource};
use cc_schedule::SimClock;
use log::{debug, info};

use crate::{
    ArrivalGenerator, CallProcess, CallRecord, SimError, SimObserver, SimReport, SimResult,
};

// ── Actions ───────────────────────────────────────────────────────────────────

/// What an event does when it fires.  Each variant is the continuation of one
/// suspended process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The arrival generator's wait elapsed: draw a priority, spawn a call,
    /// and schedule the next arrival.
    NextArrival,
    /// Spawn a call with a fixed priority (scripted arrivals).
    Spawn(Priority),
    /// Start a freshly spawned call: it arrives and requests an operator.
    Start(CallId),
    /// Resume a waiting call that was handed `permit` by a release.
    Resume { call: CallId, permit: Permit },
    /// A call's handling time elapsed.
    Complete(CallId),
}

// ── CallCenter ────────────────────────────────────────────────────────────────

/// Everything the event handler mutates, split from the clock so the clock
/// can lend itself to the handler during [`SimClock::run`].
pub struct CallCenter<R: RandomSource> {
    pub(crate) operators:     PriorityResource<CallId>,
    /// Every call spawned so far, indexed by `CallId`.
    pub(crate) calls:         Vec<CallProcess>,
    pub(crate) rng:           R,
    /// `None` when arrivals are scripted.
    pub(crate) generator:     Option<ArrivalGenerator>,
    pub(crate) call_duration: i64,
    /// Occupancy seen by each arrival, before it requests an operator.
    pub(crate) arrival_trace: Vec<OccupancySample>,
}

impl<R: RandomSource> CallCenter<R> {
    pub fn operators(&self) -> &PriorityResource<CallId> {
        &self.operators
    }

    pub fn calls(&self) -> &[CallProcess] {
        &self.calls
    }

    pub fn records(&self) -> Vec<CallRecord> {
        self.calls.iter().map(|c| c.record().clone()).collect()
    }

    pub fn arrival_trace(&self) -> &[OccupancySample] {
        &self.arrival_trace
    }

    /// Draw the next inter-arrival delay and queue the arrival.  No-op for
    /// scripted runs.
    pub(crate) fn schedule_next_arrival(&mut self, clock: &mut SimClock<Action>) -> SimResult<()> {
        if let Some(generator) = &self.generator {
            let delay = generator.draw_delay(&mut self.rng);
            clock.schedule(delay, Action::NextArrival)?;
        }
        Ok(())
    }

    fn dispatch<O: SimObserver>(
        &mut self,
        clock:    &mut SimClock<Action>,
        action:   Action,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = clock.now();
        match action {
            Action::NextArrival => {
                let priority = match &self.generator {
                    Some(generator) => generator
                        .draw_priority(&mut self.rng)
                        .ok_or_else(|| CoreError::Config("no priority levels to draw from".into()))?,
                    None => return Ok(()),
                };
                self.spawn(priority, clock)?;
                self.schedule_next_arrival(clock)?;
            }
            Action::Spawn(priority) => {
                self.spawn(priority, clock)?;
            }
            Action::Start(call) => self.start(call, now, clock, observer)?,
            Action::Resume { call, permit } => {
                self.begin_service(call, permit, now, clock, observer)?;
            }
            Action::Complete(call) => self.complete(call, now, clock, observer)?,
        }
        Ok(())
    }

    // ── Process steps ─────────────────────────────────────────────────────

    fn spawn(&mut self, priority: Priority, clock: &mut SimClock<Action>) -> SimResult<CallId> {
        let now = clock.now();
        let id = CallId::try_from(self.calls.len())
            .map_err(|_| CoreError::Config("call id space exhausted".into()))?;
        self.calls.push(CallProcess::new(id, priority, now));
        self.arrival_trace.push(OccupancySample { time: now, held: self.operators.held() });
        clock.schedule(0, Action::Start(id))?;
        Ok(id)
    }

    fn start<O: SimObserver>(
        &mut self,
        id:       CallId,
        now:      SimTime,
        clock:    &mut SimClock<Action>,
        observer: &mut O,
    ) -> SimResult<()> {
        let call = self.call_mut(id)?;
        call.arrive(now)?;
        let priority = call.priority();
        info!("Call {} with priority {} arrived at {} minutes.", id.0, priority.0, now.0);
        observer.on_call_arrived(call.record());

        let seen = self.operators.samples().len();
        match self.operators.request(priority, id, now) {
            Admission::Granted(permit) => {
                self.forward_samples(seen, observer);
                self.begin_service(id, permit, now, clock, observer)
            }
            Admission::Queued { enqueue_sequence } => {
                debug!("Call {} waiting (queue position key #{enqueue_sequence}).", id.0);
                Ok(())
            }
        }
    }

    fn begin_service<O: SimObserver>(
        &mut self,
        id:       CallId,
        permit:   Permit,
        now:      SimTime,
        clock:    &mut SimClock<Action>,
        observer: &mut O,
    ) -> SimResult<()> {
        let call = self.call_mut(id)?;
        call.begin_service(now, permit)?;
        info!("Call {} started being handled at {} minutes.", id.0, now.0);
        observer.on_service_start(call.record());
        clock.schedule(self.call_duration, Action::Complete(id))?;
        Ok(())
    }

    fn complete<O: SimObserver>(
        &mut self,
        id:       CallId,
        now:      SimTime,
        clock:    &mut SimClock<Action>,
        observer: &mut O,
    ) -> SimResult<()> {
        let call = self.call_mut(id)?;
        let permit = call.depart(now)?;
        info!("Call {} finished at {} minutes.", id.0, now.0);
        observer.on_call_departed(call.record());

        let seen = self.operators.samples().len();
        let handoff = self.operators.release(permit, now)?;
        self.forward_samples(seen, observer);
        if let Some(Handoff { waiter, permit }) = handoff {
            clock.schedule(0, Action::Resume { call: waiter, permit })?;
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn call_mut(&mut self, id: CallId) -> SimResult<&mut CallProcess> {
        self.calls.get_mut(id.index()).ok_or(SimError::UnknownCall(id))
    }

    fn forward_samples<O: SimObserver>(&self, from: usize, observer: &mut O) {
        for &sample in &self.operators.samples()[from..] {
            observer.on_occupancy(sample);
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the clock and the call center for exactly one run.  Nothing is
/// global, so independent `Sim`s can run side by side (see
/// [`run_replications`][crate::run_replications]).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource = SimRng> {
    /// Configuration the run was built from.
    pub config: SimConfig,

    /// Discrete-event clock driving every process.
    pub clock: SimClock<Action>,

    /// Operator pool, call processes, RNG and arrival generator.
    pub center: CallCenter<R>,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to `config.horizon`, then report.
    ///
    /// Any engine error (negative delay, causality violation, double release,
    /// illegal process transition) aborts the run.  Calls still waiting or in
    /// service at the horizon are left incomplete.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            "Call center initialized with {} operators (horizon {} minutes, seed {}).",
            self.config.num_operators, self.config.horizon, self.config.seed,
        );
        self.run_until(self.config.end_time(), observer)?;

        let records = self.center.records();
        observer.on_sim_end(self.clock.now(), &records);
        let report = self.report();
        info!(
            "Simulation ended at {} minutes: {} arrived, {} served, {} departed.",
            report.final_time.0,
            report.summary.arrived,
            report.summary.served,
            report.summary.departed,
        );
        Ok(report)
    }

    /// Dispatch every event up to and including `until` (ignores the
    /// configured horizon).  Useful for tests and incremental stepping.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<()> {
        let Sim { clock, center, .. } = self;
        clock.run(until, |clock, action| center.dispatch(clock, action, observer))
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Snapshot of everything recorded so far.
    pub fn report(&self) -> SimReport {
        SimReport::new(
            &self.config,
            self.clock.now(),
            self.center.operators.samples().to_vec(),
            self.center.arrival_trace.clone(),
            self.center.records(),
            self.center.operators.max_queue_len(),
        )
    }
}
