//! The capability registry mapping container types to organizers.

use std::collections::HashMap;

use canopy_types::ContentTypeId;

use crate::organizer::Organizer;

/// Registry of organizing capabilities, keyed by content type.
///
/// A content type *opts in* to organizing its children by registering an
/// [`Organizer`] here. Items stay plain host data; asking "does the item at
/// this location organize its children?" is a lookup against this set, not
/// type inspection of the item.
#[derive(Default)]
pub struct StrategySet {
    organizers: HashMap<ContentTypeId, Box<dyn Organizer>>,
}

impl StrategySet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an organizer for a container type.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register(&mut self, kind: ContentTypeId, organizer: Box<dyn Organizer>) {
        self.organizers.insert(kind, organizer);
    }

    /// The organizer registered for a container type, if any.
    pub fn organizer_for(&self, kind: ContentTypeId) -> Option<&dyn Organizer> {
        self.organizers.get(&kind).map(|organizer| &**organizer)
    }

    /// Number of registered container types.
    pub fn len(&self) -> usize {
        self.organizers.len()
    }

    /// Returns `true` if no container type is registered.
    pub fn is_empty(&self) -> bool {
        self.organizers.is_empty()
    }
}

impl std::fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<String> = self
            .organizers
            .iter()
            .map(|(kind, organizer)| format!("{kind} => {}", organizer.name()))
            .collect();
        entries.sort();
        f.debug_struct("StrategySet")
            .field("organizers", &entries)
            .finish()
    }
}
