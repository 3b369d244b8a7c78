use canopy_types::{ContentTypeId, Item, Location};

use crate::error::{Result, StructureError};
use crate::organizer::{Organizer, RouteContext};

/// Buckets children by the human-readable name of their content type.
///
/// All items of one type share a single bucket named after the type's
/// descriptor (e.g. every "News page" lands under a bucket called
/// "News page"). A child whose type has no descriptor fails the hop —
/// routing by an unresolvable type would file it under an arbitrary name.
#[derive(Clone, Debug)]
pub struct KindNameOrganizer {
    bucket_kind: ContentTypeId,
}

impl KindNameOrganizer {
    /// Create a strategy whose buckets are of the given container type.
    pub fn new(bucket_kind: ContentTypeId) -> Self {
        Self { bucket_kind }
    }
}

impl Organizer for KindNameOrganizer {
    fn name(&self) -> &str {
        "kind-name"
    }

    fn route(&self, container: &Item, child: &Item, ctx: &RouteContext<'_>) -> Result<Location> {
        if child.kind == self.bucket_kind || child.name.is_empty() {
            return Ok(container.location);
        }

        let descriptor = ctx
            .types
            .descriptor(child.kind)?
            .ok_or(StructureError::UnknownContainerKind { kind: child.kind })?;

        let bucket =
            ctx.resolver
                .get_or_create(&container.location, self.bucket_kind, &descriptor.name)?;
        Ok(bucket.location)
    }
}
