use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::ContentTypeId;
use crate::location::Location;

/// A unit of content as the host hands it to Canopy.
///
/// An `Item` is a snapshot of the fields routing needs: identity, proposed
/// or current parent, name, type, and creation timestamp. `attributes`
/// carries additional named values (date strategies can be pointed at a
/// date-valued attribute instead of `created`).
///
/// Routing mutates nothing on an item except `parent`, and only as the
/// final recorded outcome of a resolution walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The item's own location. Empty for an item that has not been saved
    /// yet (the pre-create hook sees items in this state).
    pub location: Location,
    /// The item's parent (or proposed parent) location.
    pub parent: Location,
    /// Display name. May be empty for content the editor has not named yet.
    pub name: String,
    /// The item's content type.
    pub kind: ContentTypeId,
    /// Creation timestamp, as recorded by the host.
    pub created: DateTime<Utc>,
    /// Additional named values, host-defined.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Item {
    /// Create an item snapshot.
    pub fn new(
        location: Location,
        parent: Location,
        name: impl Into<String>,
        kind: ContentTypeId,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            location,
            parent,
            name: name.into(),
            kind,
            created,
            attributes: BTreeMap::new(),
        }
    }

    /// Attach a named attribute (builder style).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a named attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
