//! Host CMS collaborator contracts for Canopy.
//!
//! Canopy does not persist anything itself. Everything it knows about the
//! content tree goes through two narrow contracts implemented by the host
//! content-management system:
//!
//! - [`ContentStore`] — fetch children, resolve a location to an item,
//!   create/save items, move items.
//! - [`TypeRegistry`] — resolve a content type id to its metadata.
//!
//! Both are synchronous, blocking contracts: the host dispatches content
//! events from its own request threads and Canopy runs to completion inside
//! the callback (see the engine crate). Implementations must be
//! `Send + Sync` because walks for different items may run concurrently.
//!
//! # Modules
//!
//! - [`error`] — Error types for host operations
//! - [`traits`] — The [`ContentStore`] and [`TypeRegistry`] contracts
//! - [`memory`] — In-memory [`InMemoryHost`] for tests and ephemeral use

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{HostError, Result};
pub use memory::{InMemoryHost, MoveRecord};
pub use traits::{ContentStore, TypeRegistry};
