//! Domain model for portfolio catalogs and static site content.
//!
//! # Responsibility
//! - Define the item shapes filtered by the Projects and Blog sections.
//! - Define presentation-only profile records rendered as-is.
//!
//! # Invariants
//! - Every catalog item is identified by a stable `ItemId`.
//! - Tags are compared case-sensitively by exact match.

pub mod item;
pub mod profile;
