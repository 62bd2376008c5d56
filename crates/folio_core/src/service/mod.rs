//! View-session services.
//!
//! # Responsibility
//! - Own per-view filter and overlay state over a shared catalog.
//! - Keep derived state (tag vocabulary, visible list) behind explicit
//!   invalidation so reads never recompute implicitly.
//!
//! # Invariants
//! - Every event is applied as one atomic state change.
//! - The open item, when present, always exists in the current catalog.

pub mod catalog_view;

pub use catalog_view::{BlogView, CatalogView, ProjectsView, ViewError, ViewEvent};
