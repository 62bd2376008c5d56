//! Tag/text filtering over catalog items.
//!
//! # Responsibility
//! - Derive the sorted tag vocabulary of a catalog.
//! - Define `FilterState` and the conjunctive (AND) visibility predicate.
//!
//! # Invariants
//! - Filtering preserves catalog order; it never sorts or ranks.
//! - Selecting more tags never widens the visible set.
//! - An empty `FilterState` is the identity filter.

pub mod state;
pub mod tags;

pub use state::{filter_items, is_visible, matches_query, matches_tags, FilterState};
pub use tags::{extract_tags, toggle_tag};
