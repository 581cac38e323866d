use cc_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid delay {delay} at {now}: delays must be non-negative")]
    InvalidDelay { delay: i64, now: SimTime },

    #[error("causality violation: event #{sequence} at {event_time} popped after clock reached {now}")]
    CausalityViolation {
        now:        SimTime,
        event_time: SimTime,
        sequence:   u64,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
