use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A location string did not parse.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
}
