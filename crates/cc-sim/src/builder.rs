//! Fluent builder for constructing a [`Sim`].

use cc_core::{CoreError, RandomSource, SimConfig, SimRng};
use cc_resource::PriorityResource;
use cc_schedule::SimClock;

use crate::{
    Action, ArrivalGenerator, ArrivalSource, CallCenter, ScriptedArrival, Sim, SimResult,
};

/// Fluent builder for [`Sim<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                  |
/// |----------------------------|------------------------------------------|
/// | `.rng(r)`                  | `SimRng::new(config.seed)`               |
/// | `.scripted_arrivals(v)`    | Random arrivals drawn from `config`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default()).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource = SimRng> {
    config: SimConfig,
    rng:    R,
    source: ArrivalSource,
}

impl SimBuilder<SimRng> {
    pub fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        let source = ArrivalSource::Random(ArrivalGenerator::from_config(&config));
        Self { config, rng, source }
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Replace the random source (e.g. with a scripted fake in tests).
    pub fn rng<R2: RandomSource>(self, rng: R2) -> SimBuilder<R2> {
        SimBuilder { config: self.config, rng, source: self.source }
    }

    /// Drive the run from a fixed list of arrivals instead of the generator.
    /// Arrivals sharing a time start in list order.
    pub fn scripted_arrivals(mut self, arrivals: Vec<ScriptedArrival>) -> Self {
        self.source = ArrivalSource::Scripted(arrivals);
        self
    }

    /// Validate and build the [`Sim`], queueing the first arrival (or every
    /// scripted arrival).
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;
        let call_duration = i64::try_from(self.config.call_duration)
            .map_err(|_| CoreError::Config("call_duration out of range".into()))?;

        let mut clock = SimClock::new();
        let mut center = CallCenter {
            operators:     PriorityResource::new(self.config.num_operators)?,
            calls:         Vec::new(),
            rng:           self.rng,
            generator:     None,
            call_duration,
            arrival_trace: Vec::new(),
        };

        match self.source {
            ArrivalSource::Random(generator) => {
                center.generator = Some(generator);
                center.schedule_next_arrival(&mut clock)?;
            }
            ArrivalSource::Scripted(mut arrivals) => {
                arrivals.sort_by_key(|a| a.at);
                for arrival in arrivals {
                    let delay = i64::try_from(arrival.at.0).map_err(|_| {
                        CoreError::Config(format!("scripted arrival at {} out of range", arrival.at))
                    })?;
                    clock.schedule(delay, Action::Spawn(arrival.priority))?;
                }
            }
        }

        Ok(Sim { config: self.config, clock, center })
    }
}
