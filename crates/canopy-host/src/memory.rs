//! In-memory host for testing and ephemeral use.
//!
//! [`InMemoryHost`] implements both [`ContentStore`] and [`TypeRegistry`]
//! with `HashMap`s behind `RwLock`s. It additionally keeps a move log and
//! call counters so tests can assert *how many* host transactions a
//! resolution caused, not just the end state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;

use canopy_types::{AccessCheck, ContentTypeId, Item, Location, TypeDescriptor};

use crate::error::{HostError, Result};
use crate::traits::{ContentStore, TypeRegistry};

/// One recorded `move_item` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// The item that was moved.
    pub item: Location,
    /// Where it was moved to.
    pub destination: Location,
    /// The access check the caller requested.
    pub access: AccessCheck,
}

/// An in-memory implementation of [`ContentStore`] and [`TypeRegistry`].
///
/// Node ids are allocated monotonically starting at 1 (id 0 is the empty
/// location). Data is lost when the host is dropped.
#[derive(Debug)]
pub struct InMemoryHost {
    nodes: RwLock<HashMap<u64, Item>>,
    descriptors: RwLock<HashMap<ContentTypeId, TypeDescriptor>>,
    next_id: AtomicU64,
    creates: AtomicUsize,
    saves: AtomicUsize,
    moves: RwLock<Vec<MoveRecord>>,
}

impl InMemoryHost {
    /// Create a new empty host.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(HashMap::new()),
            descriptors: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            creates: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            moves: RwLock::new(Vec::new()),
        }
    }

    /// Register a content type descriptor.
    pub fn register_type(&self, descriptor: TypeDescriptor) {
        let mut descriptors = self.descriptors.write().unwrap_or_else(|e| e.into_inner());
        descriptors.insert(descriptor.id, descriptor);
    }

    /// Insert an item directly, allocating a node id if its location is
    /// empty. Returns the item's location.
    ///
    /// Test seeding only; it does not count as a `save` transaction.
    pub fn add(&self, mut item: Item) -> Location {
        if item.location.is_none() {
            item.location = Location::node(self.allocate_id());
        }
        let location = item.location;
        let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
        nodes.insert(location.id(), item);
        location
    }

    /// Number of `create_default` calls so far.
    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::Relaxed)
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// All `move_item` calls so far, in order.
    pub fn move_log(&self) -> Vec<MoveRecord> {
        self.moves.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn read_nodes(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<u64, Item>>> {
        self.nodes
            .read()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for InMemoryHost {
    fn children(&self, parent: &Location) -> Result<Vec<Item>> {
        let nodes = self.read_nodes()?;
        let mut children: Vec<Item> = nodes
            .values()
            .filter(|item| item.parent.same_node(parent) && !item.parent.is_none())
            .cloned()
            .collect();
        // Stable creation order: node ids are allocated monotonically.
        children.sort_by_key(|item| item.location.id());
        Ok(children)
    }

    fn get(&self, location: &Location) -> Result<Option<Item>> {
        if location.is_none() {
            return Ok(None);
        }
        let nodes = self.read_nodes()?;
        Ok(nodes.get(&location.id()).cloned())
    }

    fn create_default(&self, parent: &Location, descriptor: &TypeDescriptor) -> Result<Item> {
        self.creates.fetch_add(1, Ordering::Relaxed);
        Ok(Item::new(
            Location::none(),
            *parent,
            "",
            descriptor.id,
            Utc::now(),
        ))
    }

    fn save(&self, item: &Item) -> Result<Location> {
        self.saves.fetch_add(1, Ordering::Relaxed);

        let mut saved = item.clone();
        if saved.location.is_none() {
            saved.location = Location::node(self.allocate_id());
        }
        let location = saved.location;

        let mut nodes = self
            .nodes
            .write()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;
        debug!(%location, name = %saved.name, "saved item");
        nodes.insert(location.id(), saved);
        Ok(location)
    }

    fn move_item(
        &self,
        item: &Location,
        destination: &Location,
        access: AccessCheck,
    ) -> Result<()> {
        let mut nodes = self
            .nodes
            .write()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;

        let node = nodes
            .get_mut(&item.id())
            .ok_or(HostError::NotFound { location: *item })?;
        node.parent = destination.published();
        debug!(item = %item, destination = %destination, "moved item");

        drop(nodes);
        let mut moves = self
            .moves
            .write()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;
        moves.push(MoveRecord {
            item: *item,
            destination: *destination,
            access,
        });
        Ok(())
    }
}

impl TypeRegistry for InMemoryHost {
    fn descriptor(&self, kind: ContentTypeId) -> Result<Option<TypeDescriptor>> {
        let descriptors = self
            .descriptors
            .read()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;
        Ok(descriptors.get(&kind).cloned())
    }
}
