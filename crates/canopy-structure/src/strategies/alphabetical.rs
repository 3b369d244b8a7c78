use canopy_types::{ContentTypeId, Item, Location};

use crate::error::Result;
use crate::organizer::{Organizer, RouteContext};

/// Buckets children by the uppercased first character of their name.
///
/// An item named "apple" is routed to a bucket named "A" directly under the
/// container. Terminal cases: the child is itself a bucket (its type is
/// `bucket_kind`), or the child has no name yet.
#[derive(Clone, Debug)]
pub struct AlphabeticalOrganizer {
    bucket_kind: ContentTypeId,
}

impl AlphabeticalOrganizer {
    /// Create a strategy whose buckets are of the given container type.
    pub fn new(bucket_kind: ContentTypeId) -> Self {
        Self { bucket_kind }
    }
}

impl Organizer for AlphabeticalOrganizer {
    fn name(&self) -> &str {
        "alphabetical"
    }

    fn route(&self, container: &Item, child: &Item, ctx: &RouteContext<'_>) -> Result<Location> {
        if child.kind == self.bucket_kind {
            return Ok(container.location);
        }
        // Uppercasing may expand to multiple characters (e.g. 'ß' -> "SS").
        let bucket_name: String = match child.name.chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => return Ok(container.location),
        };

        let bucket = ctx
            .resolver
            .get_or_create(&container.location, self.bucket_kind, &bucket_name)?;
        Ok(bucket.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use canopy_host::{ContentStore, InMemoryHost};
    use canopy_types::{ContentCategory, TypeDescriptor};
    use chrono::{TimeZone, Utc};

    use crate::resolver::ContainerResolver;

    const INDEX: ContentTypeId = ContentTypeId(1);
    const LETTER: ContentTypeId = ContentTypeId(2);
    const PAGE: ContentTypeId = ContentTypeId(3);

    struct Fixture {
        host: Arc<InMemoryHost>,
        resolver: ContainerResolver,
        index: Item,
    }

    fn test_fixture() -> Fixture {
        let host = Arc::new(InMemoryHost::new());
        host.register_type(TypeDescriptor::new(INDEX, "Index", ContentCategory::Page));
        host.register_type(TypeDescriptor::new(LETTER, "Letter", ContentCategory::Page));
        host.register_type(TypeDescriptor::new(PAGE, "Standard page", ContentCategory::Page));

        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let location = host.add(Item::new(
            Location::none(),
            Location::none(),
            "Index",
            INDEX,
            created,
        ));
        let index = host.get(&location).unwrap().unwrap();

        let resolver = ContainerResolver::new(host.clone(), host.clone());
        Fixture {
            host,
            resolver,
            index,
        }
    }

    fn test_child(fixture: &Fixture, name: &str, kind: ContentTypeId) -> Item {
        let created = Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap();
        Item::new(Location::none(), fixture.index.location, name, kind, created)
    }

    // ---- Test 1: "apple" routes to a bucket named "A" ----
    #[test]
    fn routes_to_uppercased_initial() {
        let fixture = test_fixture();
        let strategy = AlphabeticalOrganizer::new(LETTER);
        let ctx = RouteContext::new(&fixture.resolver, fixture.host.as_ref());

        let child = test_child(&fixture, "apple", PAGE);
        let target = strategy.route(&fixture.index, &child, &ctx).unwrap();

        let bucket = fixture.host.get(&target).unwrap().unwrap();
        assert_eq!(bucket.name, "A");
        assert_eq!(bucket.kind, LETTER);
        assert!(bucket.parent.same_node(&fixture.index.location));
    }

    // ---- Test 2: Two items with the same initial share one bucket ----
    #[test]
    fn same_initial_shares_bucket() {
        let fixture = test_fixture();
        let strategy = AlphabeticalOrganizer::new(LETTER);
        let ctx = RouteContext::new(&fixture.resolver, fixture.host.as_ref());

        let first = strategy
            .route(&fixture.index, &test_child(&fixture, "apple", PAGE), &ctx)
            .unwrap();
        let second = strategy
            .route(&fixture.index, &test_child(&fixture, "apricot", PAGE), &ctx)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(fixture.host.create_count(), 1);
    }

    // ---- Test 3: A bucket item is terminal ----
    #[test]
    fn bucket_kind_is_terminal() {
        let fixture = test_fixture();
        let strategy = AlphabeticalOrganizer::new(LETTER);
        let ctx = RouteContext::new(&fixture.resolver, fixture.host.as_ref());

        let bucket = test_child(&fixture, "A", LETTER);
        let target = strategy.route(&fixture.index, &bucket, &ctx).unwrap();

        assert_eq!(target, fixture.index.location);
        assert_eq!(fixture.host.create_count(), 0);
    }

    // ---- Test 4: An unnamed child is terminal ----
    #[test]
    fn empty_name_is_terminal() {
        let fixture = test_fixture();
        let strategy = AlphabeticalOrganizer::new(LETTER);
        let ctx = RouteContext::new(&fixture.resolver, fixture.host.as_ref());

        let unnamed = test_child(&fixture, "", PAGE);
        let target = strategy.route(&fixture.index, &unnamed, &ctx).unwrap();

        assert_eq!(target, fixture.index.location);
        assert_eq!(fixture.host.create_count(), 0);
    }

    // ---- Test 5: Lowercase and multibyte initials uppercase correctly ----
    #[test]
    fn uppercases_non_ascii_initials() {
        let fixture = test_fixture();
        let strategy = AlphabeticalOrganizer::new(LETTER);
        let ctx = RouteContext::new(&fixture.resolver, fixture.host.as_ref());

        let child = test_child(&fixture, "ärmel", PAGE);
        let target = strategy.route(&fixture.index, &child, &ctx).unwrap();

        let bucket = fixture.host.get(&target).unwrap().unwrap();
        assert_eq!(bucket.name, "Ä");
    }
}
