//! The parent-resolution walk.

use std::sync::Arc;

use tracing::debug;

use canopy_host::{ContentStore, TypeRegistry};
use canopy_structure::{ContainerResolver, Organizer, RouteContext, StrategySet};
use canopy_types::{Item, Location};

use crate::config::RouterConfig;
use crate::error::Result;

/// Routes items to their computed position in the content tree.
///
/// Starting from an item's proposed parent, the router repeatedly asks the
/// organizer of the current location where the item belongs and advances to
/// the answer, until it reaches a location with no organizing capability or
/// revisits a location (cycle guard). The result is the item's final parent.
///
/// All collaborators are injected at construction. The router holds no
/// mutable state; one instance serves concurrent walks from multiple host
/// request threads.
pub struct ParentRouter {
    store: Arc<dyn ContentStore>,
    types: Arc<dyn TypeRegistry>,
    strategies: StrategySet,
    config: RouterConfig,
    resolver: ContainerResolver,
}

impl ParentRouter {
    /// Create a router over the given host collaborators and strategies.
    pub fn new(
        store: Arc<dyn ContentStore>,
        types: Arc<dyn TypeRegistry>,
        strategies: StrategySet,
        config: RouterConfig,
    ) -> Self {
        let resolver = ContainerResolver::new(store.clone(), types.clone());
        Self {
            store,
            types,
            strategies,
            config,
            resolver,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Resolve the location `item` should actually live at, starting from
    /// a proposed parent.
    ///
    /// Each visited location is consulted at most once; revisiting one ends
    /// the walk with the current candidate (a misconfigured strategy loop
    /// degrades to "stay where routing last pointed", never to an infinite
    /// loop or an error). A hop that yields an empty location keeps the
    /// current candidate. Hops are strictly sequential: a hop only runs
    /// after the previous hop's buckets are durably created.
    pub fn resolve_parent(&self, proposed: &Location, item: &Item) -> Result<Location> {
        let mut visited: Vec<Location> = Vec::new();
        let mut current = *proposed;
        let mut organizer = self.organizer_at(&current)?;

        while let Some((container, strategy)) = organizer {
            if visited.iter().any(|seen| seen.same_node(&current)) {
                debug!(location = %current, "routing cycle, stopping walk");
                break;
            }
            visited.push(current);

            let ctx = RouteContext::new(&self.resolver, self.types.as_ref());
            let next = strategy.route(&container, item, &ctx)?;
            debug!(
                strategy = strategy.name(),
                container = %container.location,
                next = %next,
                "routing hop"
            );

            if !next.is_none() {
                current = next;
            }
            organizer = self.organizer_at(&current)?;
        }

        Ok(current)
    }

    /// The organizing container at a location, if there is one.
    ///
    /// `None` when the location is empty, resolves to no item, or the
    /// item's type has no registered organizer.
    fn organizer_at(&self, location: &Location) -> Result<Option<(Item, &dyn Organizer)>> {
        if location.is_none() {
            return Ok(None);
        }
        let Some(container) = self.store.get(location)? else {
            return Ok(None);
        };
        Ok(self
            .strategies
            .organizer_for(container.kind)
            .map(|strategy| (container, strategy)))
    }

    pub(crate) fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub(crate) fn is_page(&self, item: &Item) -> Result<bool> {
        let descriptor = self.types.descriptor(item.kind)?;
        Ok(descriptor.is_some_and(|d| d.category.is_page()))
    }
}
