use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier for a host content type.
///
/// The host assigns these; Canopy only compares them and hands them back
/// to the host's type registry for metadata.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentTypeId(pub u32);

impl fmt::Debug for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentTypeId({})", self.0)
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad classification of a content type.
///
/// Only `Page` content participates in structure routing; blocks and media
/// pass through the event hooks untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentCategory {
    /// A page in the site tree.
    Page,
    /// A shared block, not addressable in the page tree.
    Block,
    /// A media asset.
    Media,
}

impl ContentCategory {
    /// Returns `true` for page content.
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page)
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Page => "Page",
            Self::Block => "Block",
            Self::Media => "Media",
        };
        write!(f, "{s}")
    }
}

/// Metadata for a content type, as resolved by the host's type registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// The type's numeric id.
    pub id: ContentTypeId,
    /// Human-readable type name (e.g. "Article page"). Type-name bucketing
    /// files children under this string.
    pub name: String,
    /// Broad category of the type.
    pub category: ContentCategory,
}

impl TypeDescriptor {
    /// Create a descriptor.
    pub fn new(id: ContentTypeId, name: impl Into<String>, category: ContentCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}
