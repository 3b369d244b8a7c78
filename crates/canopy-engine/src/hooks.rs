//! Content event entry points.
//!
//! The host calls these from its before-create and before-move hooks. Both
//! are no-ops for anything that is not page content, and both can be
//! switched off via [`RouterConfig`].
//!
//! [`RouterConfig`]: crate::config::RouterConfig

use tracing::debug;

use canopy_types::{AccessCheck, Item, Location};

use crate::error::Result;
use crate::router::ParentRouter;

impl ParentRouter {
    /// Pre-create hook: rewrite the proposed parent of an item about to be
    /// created.
    ///
    /// Runs the walk from `item.parent` and records the result back into
    /// `item.parent`. The host then proceeds with creation at the rewritten
    /// location. Nothing else on the item is touched.
    pub fn on_creating(&self, item: &mut Item) -> Result<()> {
        if !self.config().organize_creates {
            return Ok(());
        }
        if !self.is_page(item)? {
            return Ok(());
        }

        let proposed = item.parent;
        let resolved = self.resolve_parent(&proposed, item)?;
        if !resolved.same_node(&proposed) {
            debug!(item = %item.name, from = %proposed, to = %resolved, "rerouted creation");
        }
        item.parent = resolved;
        Ok(())
    }

    /// Pre-move hook: re-route an existing item that is about to be moved
    /// to `destination`.
    ///
    /// Runs the walk from the proposed destination. If the walk lands
    /// somewhere else (node comparison, draft markers ignored) and the
    /// result is usable, the item is moved there with access checks
    /// bypassed. A resolution equal to the proposed destination issues no
    /// move at all.
    pub fn on_moving(&self, item: &Location, destination: &Location) -> Result<()> {
        if !self.config().organize_moves {
            return Ok(());
        }
        let Some(item) = self.store().get(item)? else {
            return Ok(());
        };
        if !self.is_page(&item)? {
            return Ok(());
        }

        let resolved = self.resolve_parent(destination, &item)?;
        if resolved.is_none() || resolved.same_node(destination) {
            return Ok(());
        }

        debug!(item = %item.location, from = %destination, to = %resolved, "rerouted move");
        self.store()
            .move_item(&item.location, &resolved, AccessCheck::Bypass)?;
        Ok(())
    }
}
