//! Lookup-or-create for named child containers.

use std::sync::Arc;

use tracing::debug;

use canopy_host::{ContentStore, TypeRegistry};
use canopy_types::{ContentTypeId, Item, Location};

use crate::error::{Result, StructureError};

/// Resolves a named child container under a parent, creating it through the
/// host if it does not exist yet.
///
/// The resolver knows nothing about bucketing policy; strategies decide the
/// name, the resolver only materializes it. Creation is idempotent at this
/// layer: an existing child with the requested type and exact name is
/// returned unmodified, otherwise exactly one item is created and saved.
///
/// There is deliberately no lock around the check-then-create window: two
/// concurrent walks deriving the same bucket name can race, and resolving
/// that duplicate is left to the host's own versioning (see the engine
/// crate's concurrency notes).
pub struct ContainerResolver {
    store: Arc<dyn ContentStore>,
    types: Arc<dyn TypeRegistry>,
}

impl ContainerResolver {
    /// Create a resolver over the given host collaborators.
    pub fn new(store: Arc<dyn ContentStore>, types: Arc<dyn TypeRegistry>) -> Self {
        Self { store, types }
    }

    /// Return the child container of `parent` with the given type and name,
    /// creating and publishing it if absent.
    ///
    /// Name matching is exact (`==`, case-sensitive, no locale folding) and
    /// takes the first match in the host's child order. An empty `name` is
    /// unusual but valid — it names an empty bucket.
    pub fn get_or_create(
        &self,
        parent: &Location,
        kind: ContentTypeId,
        name: &str,
    ) -> Result<Item> {
        if parent.is_none() {
            return Err(StructureError::EmptyParent);
        }

        if let Some(existing) = self.existing_child(parent, kind, name)? {
            return Ok(existing);
        }

        self.create_child(parent, kind, name)
    }

    fn existing_child(
        &self,
        parent: &Location,
        kind: ContentTypeId,
        name: &str,
    ) -> Result<Option<Item>> {
        let children = self.store.children(parent)?;
        Ok(children
            .into_iter()
            .filter(|child| child.kind == kind)
            .find(|child| child.name == name))
    }

    fn create_child(&self, parent: &Location, kind: ContentTypeId, name: &str) -> Result<Item> {
        let descriptor = self
            .types
            .descriptor(kind)?
            .ok_or(StructureError::UnknownContainerKind { kind })?;

        let mut child = self.store.create_default(parent, &descriptor)?;
        child.name = name.to_string();
        child.location = self.store.save(&child)?;

        debug!(parent = %parent, %kind, name, location = %child.location, "created container");
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_host::InMemoryHost;
    use canopy_types::{ContentCategory, TypeDescriptor};
    use chrono::{TimeZone, Utc};

    const FOLDER: ContentTypeId = ContentTypeId(1);
    const PAGE: ContentTypeId = ContentTypeId(2);

    fn test_setup() -> (Arc<InMemoryHost>, ContainerResolver, Location) {
        let host = Arc::new(InMemoryHost::new());
        host.register_type(TypeDescriptor::new(FOLDER, "Folder", ContentCategory::Page));
        host.register_type(TypeDescriptor::new(PAGE, "Standard page", ContentCategory::Page));

        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let root = host.add(Item::new(
            Location::none(),
            Location::none(),
            "root",
            FOLDER,
            created,
        ));

        let resolver = ContainerResolver::new(host.clone(), host.clone());
        (host, resolver, root)
    }

    // ---- Test 1: Creating a missing container publishes exactly once ----
    #[test]
    fn creates_missing_container() {
        let (host, resolver, root) = test_setup();

        let bucket = resolver.get_or_create(&root, FOLDER, "A").unwrap();

        assert!(!bucket.location.is_none());
        assert_eq!(bucket.name, "A");
        assert_eq!(bucket.kind, FOLDER);
        assert!(bucket.parent.same_node(&root));
        assert_eq!(host.create_count(), 1);
        assert_eq!(host.save_count(), 1);
    }

    // ---- Test 2: Second call returns the same container, no new save ----
    #[test]
    fn get_or_create_is_idempotent() {
        let (host, resolver, root) = test_setup();

        let first = resolver.get_or_create(&root, FOLDER, "A").unwrap();
        let second = resolver.get_or_create(&root, FOLDER, "A").unwrap();

        assert_eq!(first.location, second.location);
        assert_eq!(host.create_count(), 1);
        assert_eq!(host.save_count(), 1);
    }

    // ---- Test 3: Name matching is exact and case-sensitive ----
    #[test]
    fn name_match_is_case_sensitive() {
        let (host, resolver, root) = test_setup();

        resolver.get_or_create(&root, FOLDER, "News").unwrap();
        resolver.get_or_create(&root, FOLDER, "news").unwrap();

        assert_eq!(host.create_count(), 2);
        let names: Vec<String> = host
            .children(&root)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["News", "news"]);
    }

    // ---- Test 4: A same-named child of another type is not a match ----
    #[test]
    fn type_filter_applies_before_name_match() {
        let (host, resolver, root) = test_setup();

        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        host.add(Item::new(Location::none(), root, "A", PAGE, created));

        let bucket = resolver.get_or_create(&root, FOLDER, "A").unwrap();
        assert_eq!(bucket.kind, FOLDER);
        assert_eq!(host.create_count(), 1);
    }

    // ---- Test 5: First match wins when duplicates already exist ----
    #[test]
    fn first_match_wins() {
        let (host, resolver, root) = test_setup();

        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let older = host.add(Item::new(Location::none(), root, "A", FOLDER, created));
        host.add(Item::new(Location::none(), root, "A", FOLDER, created));

        let bucket = resolver.get_or_create(&root, FOLDER, "A").unwrap();
        assert_eq!(bucket.location, older);
        assert_eq!(host.create_count(), 0);
    }

    // ---- Test 6: Empty bucket names are valid ----
    #[test]
    fn empty_name_is_a_valid_bucket() {
        let (host, resolver, root) = test_setup();

        let bucket = resolver.get_or_create(&root, FOLDER, "").unwrap();
        assert_eq!(bucket.name, "");

        let again = resolver.get_or_create(&root, FOLDER, "").unwrap();
        assert_eq!(bucket.location, again.location);
        assert_eq!(host.create_count(), 1);
    }

    // ---- Test 7: Empty parent is a precondition violation ----
    #[test]
    fn empty_parent_fails_fast() {
        let (_host, resolver, _root) = test_setup();

        let err = resolver
            .get_or_create(&Location::none(), FOLDER, "A")
            .unwrap_err();
        assert!(matches!(err, StructureError::EmptyParent));
    }

    // ---- Test 8: Unregistered container types fail fast ----
    #[test]
    fn unknown_kind_fails_fast() {
        let (host, resolver, root) = test_setup();

        let err = resolver
            .get_or_create(&root, ContentTypeId(99), "A")
            .unwrap_err();
        assert!(matches!(
            err,
            StructureError::UnknownContainerKind {
                kind: ContentTypeId(99)
            }
        ));
        assert_eq!(host.save_count(), 0);
    }
}
