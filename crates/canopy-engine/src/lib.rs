//! The Canopy routing engine.
//!
//! [`ParentRouter`] turns a proposed parent location into the location an
//! item actually belongs at, by walking through the organizing containers
//! registered in a [`StrategySet`]: each container re-routes the item one
//! hop deeper (creating buckets on demand) until a location with no
//! organizing capability is reached, or a location repeats (cycle guard).
//!
//! The host wires [`ParentRouter::on_creating`] and
//! [`ParentRouter::on_moving`] into its before-create and before-move
//! content events; everything else is ordinary library code with injected
//! collaborators.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use canopy_engine::{ParentRouter, RouterConfig};
//! use canopy_host::{ContentStore, InMemoryHost};
//! use canopy_structure::{DateOrganizer, StrategySet};
//! use canopy_types::{ContentCategory, ContentTypeId, Item, Location, TypeDescriptor};
//! use chrono::{TimeZone, Utc};
//!
//! const ARCHIVE: ContentTypeId = ContentTypeId(1);
//! const YEAR: ContentTypeId = ContentTypeId(2);
//! const ARTICLE: ContentTypeId = ContentTypeId(3);
//!
//! let host = Arc::new(InMemoryHost::new());
//! host.register_type(TypeDescriptor::new(ARCHIVE, "Archive", ContentCategory::Page));
//! host.register_type(TypeDescriptor::new(YEAR, "Year", ContentCategory::Page));
//! host.register_type(TypeDescriptor::new(ARTICLE, "Article", ContentCategory::Page));
//!
//! let seeded = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//! let archive = host.add(Item::new(
//!     Location::none(),
//!     Location::none(),
//!     "Archive",
//!     ARCHIVE,
//!     seeded,
//! ));
//!
//! let mut strategies = StrategySet::new();
//! strategies.register(ARCHIVE, Box::new(DateOrganizer::yearly(YEAR)));
//! let router = ParentRouter::new(host.clone(), host.clone(), strategies, RouterConfig::default());
//!
//! // An article dropped on the archive lands in its year bucket.
//! let written = Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap();
//! let mut article = Item::new(Location::none(), archive, "Launch day", ARTICLE, written);
//! router.on_creating(&mut article).unwrap();
//!
//! let year = host.get(&article.parent).unwrap().unwrap();
//! assert_eq!(year.name, "2024");
//! ```
//!
//! [`StrategySet`]: canopy_structure::StrategySet

pub mod config;
pub mod error;
mod hooks;
pub mod router;

pub use config::RouterConfig;
pub use error::{Result, RouterError};
pub use router::ParentRouter;
