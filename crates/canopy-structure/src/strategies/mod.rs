//! The concrete organizing strategies.
//!
//! Each strategy answers one routing hop: terminal (keep the child at the
//! container) or the location of a lazily created bucket.

pub mod alphabetical;
pub mod date;
pub mod kind_name;

pub use alphabetical::AlphabeticalOrganizer;
pub use date::{DateOrganizer, DatePart};
pub use kind_name::KindNameOrganizer;
