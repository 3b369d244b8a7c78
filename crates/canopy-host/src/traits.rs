//! The [`ContentStore`] and [`TypeRegistry`] contracts.
//!
//! Any backend (in-memory, database, remote CMS API) implements these to
//! let Canopy read and shape the content tree.

use canopy_types::{AccessCheck, ContentTypeId, Item, Location, TypeDescriptor};

use crate::error::Result;

/// The host content repository.
///
/// All implementations must satisfy these invariants:
/// - `children` returns items in a stable order; "first match by name"
///   during container resolution relies on it.
/// - `get` returns `Ok(None)` for stale or missing locations, never an
///   error. Errors are reserved for storage failures.
/// - `create_default` returns an *unsaved* item (empty location); the item
///   only becomes part of the tree once `save` is called.
/// - `save` persists and publishes in one host transaction and returns the
///   item's durable location.
/// - Errors are propagated, never silently swallowed.
pub trait ContentStore: Send + Sync {
    /// All direct children of a location, every content type included.
    fn children(&self, parent: &Location) -> Result<Vec<Item>>;

    /// Resolve a location to its item.
    ///
    /// Returns `Ok(None)` if the location is empty, stale, or unknown.
    fn get(&self, location: &Location) -> Result<Option<Item>>;

    /// A new unsaved item of the given type, parented at `parent`.
    fn create_default(&self, parent: &Location, descriptor: &TypeDescriptor) -> Result<Item>;

    /// Persist and publish an item, returning its durable location.
    fn save(&self, item: &Item) -> Result<Location>;

    /// Relocate an existing item to a new parent.
    fn move_item(
        &self,
        item: &Location,
        destination: &Location,
        access: AccessCheck,
    ) -> Result<()>;
}

/// The host content-type metadata registry.
pub trait TypeRegistry: Send + Sync {
    /// Resolve a content type id to its descriptor.
    ///
    /// Returns `Ok(None)` for type ids the host does not know.
    fn descriptor(&self, kind: ContentTypeId) -> Result<Option<TypeDescriptor>>;
}
