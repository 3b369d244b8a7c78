use serde::{Deserialize, Serialize};

/// Whether a host operation should enforce access control.
///
/// Moves issued by structure routing run with [`AccessCheck::Bypass`]:
/// routing acts for the system, not for the editor who triggered it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessCheck {
    /// Evaluate the caller's permissions as usual.
    #[default]
    Enforce,
    /// Skip permission evaluation for this operation.
    Bypass,
}
