//! Organizing strategies and lazy container resolution for Canopy.
//!
//! An *organizing container* is a content item whose type has an
//! [`Organizer`] registered for it: given a child item, the organizer names
//! the sub-bucket the child belongs in, and the bucket is created lazily if
//! it does not exist yet. This crate provides:
//!
//! - [`Organizer`] — the per-container routing capability
//! - [`ContainerResolver`] — get-or-create of a named child container
//! - [`StrategySet`] — the registry mapping container types to organizers
//! - The concrete strategies:
//!   [`AlphabeticalOrganizer`] (bucket by uppercased first letter),
//!   [`KindNameOrganizer`] (bucket by the child's type name),
//!   [`DateOrganizer`] (year / year-month / year-month-day cascades)
//!
//! Strategies never walk the tree themselves; they answer one hop. The
//! fixed-point walk lives in the engine crate.

pub mod error;
pub mod organizer;
pub mod registry;
pub mod resolver;
pub mod strategies;

pub use error::{Result, StructureError};
pub use organizer::{Organizer, RouteContext};
pub use registry::StrategySet;
pub use resolver::ContainerResolver;
pub use strategies::alphabetical::AlphabeticalOrganizer;
pub use strategies::date::{DateOrganizer, DatePart};
pub use strategies::kind_name::KindNameOrganizer;
