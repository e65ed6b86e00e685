//! Domain error types.

use thiserror::Error;

use crate::host::HostError;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No player with this name has ever joined.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// The host rejected an operation.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
