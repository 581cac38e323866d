use cc_core::{CallId, CoreError};
use cc_resource::ResourceError;
use cc_schedule::ScheduleError;
use thiserror::Error;

use crate::CallState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("{call} cannot {event} while {state:?}")]
    InvalidTransition {
        call:  CallId,
        state: CallState,
        event: &'static str,
    },

    #[error("{0} does not exist")]
    UnknownCall(CallId),
}

pub type SimResult<T> = Result<T, SimError>;
