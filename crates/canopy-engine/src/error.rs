//! Error types for the routing engine.

use canopy_host::HostError;
use canopy_structure::StructureError;
use thiserror::Error;

/// Errors that can abort a resolution walk or an event hook.
///
/// Cycles and dead ends are *not* errors — the walk terminates and returns
/// its best-known location. Errors here are collaborator failures.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A strategy hop failed (container creation, type metadata).
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A host operation outside a hop failed (item fetch, move).
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Convenience type alias for engine operations.
pub type Result<T> = std::result::Result<T, RouterError>;
