use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier for a node in the host content tree.
///
/// A `Location` is a numeric node id plus an optional working-copy version
/// marker. The host attaches the marker to draft versions of a node; the
/// published node and its drafts are the *same position* in the tree, so
/// most comparisons in Canopy go through [`same_node`], which ignores the
/// marker. The derived `Eq` compares both fields.
///
/// `Location::none()` (node id 0) is the empty location: "nowhere". Hosts
/// use it for detached content and as the absent value in event payloads.
///
/// [`same_node`]: Location::same_node
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    id: u64,
    version: Option<u32>,
}

impl Location {
    /// A location for a published node.
    pub const fn node(id: u64) -> Self {
        Self { id, version: None }
    }

    /// A location for a working copy (draft version) of a node.
    pub const fn draft(id: u64, version: u32) -> Self {
        Self {
            id,
            version: Some(version),
        }
    }

    /// The empty location. Represents "no position".
    pub const fn none() -> Self {
        Self {
            id: 0,
            version: None,
        }
    }

    /// Returns `true` if this is the empty location.
    pub fn is_none(&self) -> bool {
        self.id == 0
    }

    /// The raw node id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The working-copy version marker, if any.
    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// Returns `true` if both locations refer to the same tree node,
    /// ignoring any working-copy marker.
    ///
    /// This is the comparison the resolution walk and the move hook use:
    /// a draft of a node must not be treated as a different destination
    /// than the node itself.
    pub fn same_node(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// This location without its working-copy marker.
    pub fn published(&self) -> Self {
        Self {
            id: self.id,
            version: None,
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({self})")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{}_{}", self.id, v),
            None => write!(f, "{}", self.id),
        }
    }
}

impl FromStr for Location {
    type Err = TypeError;

    /// Parse `"7"` or `"7_42"` (node id, optionally `_` and a version).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidLocation(s.to_string());

        match s.split_once('_') {
            Some((id, version)) => {
                let id = id.parse().map_err(|_| invalid())?;
                let version = version.parse().map_err(|_| invalid())?;
                Ok(Self::draft(id, version))
            }
            None => {
                let id = s.parse().map_err(|_| invalid())?;
                Ok(Self::node(id))
            }
        }
    }
}
