//! Error types for host operations.

use canopy_types::Location;
use thiserror::Error;

/// Errors surfaced by host collaborators.
///
/// Canopy never catches or retries these; they propagate unchanged to the
/// host's event pipeline, which applies its own outer policy.
#[derive(Debug, Error)]
pub enum HostError {
    /// The location does not resolve to a stored item.
    #[error("content not found: {location}")]
    NotFound { location: Location },

    /// The caller lacks access for the operation.
    #[error("access denied: {location}")]
    AccessDenied { location: Location },

    /// Storage-level failure (I/O, transaction, lock).
    #[error("storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
