use thiserror::Error;

use crate::region::RegionId;

/// Errors surfaced by the editor and the capacity service boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("region {0} not found")]
    RegionNotFound(RegionId),

    #[error("region {0} must keep at least one ring")]
    EmptyRegion(RegionId),

    /// The capacity service answered with a non-success status.
    #[error("{0}")]
    Service(String),

    /// The capacity service could not be reached.
    #[error("capacity service unreachable: {0}")]
    Transport(String),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}
