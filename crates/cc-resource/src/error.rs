use cc_core::PermitId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("resource capacity must be at least 1")]
    ZeroCapacity,

    #[error("{0} released twice or never issued by this resource")]
    DoubleRelease(PermitId),
}

pub type ResourceResult<T> = Result<T, ResourceError>;
