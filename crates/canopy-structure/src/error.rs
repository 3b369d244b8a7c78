//! Error types for structure operations.

use canopy_host::HostError;
use canopy_types::ContentTypeId;
use thiserror::Error;

/// Errors that can occur while resolving or creating structure containers.
#[derive(Debug, Error)]
pub enum StructureError {
    /// A container was requested under the empty location.
    #[error("cannot resolve a container under the empty location")]
    EmptyParent,

    /// The host has no type descriptor for a configured container type.
    #[error("no type descriptor for content type {kind}")]
    UnknownContainerKind { kind: ContentTypeId },

    /// A host operation failed; passed through unchanged.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Convenience type alias for structure operations.
pub type Result<T> = std::result::Result<T, StructureError>;
