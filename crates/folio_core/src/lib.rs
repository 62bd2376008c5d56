//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for catalog and filter invariants.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod format;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod service;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use config::{ConfigError, SiteConfig, DEFAULT_BASE_PATH};
pub use filter::{extract_tags, filter_items, is_visible, toggle_tag, FilterState};
pub use format::format_number;
pub use logging::{default_log_level, init_logging, logging_status, LoggingStatus};
pub use model::item::{CatalogItem, ItemId, Media, MediaKind, Post, Project};
pub use overlay::Overlay;
pub use service::{BlogView, CatalogView, ProjectsView, ViewError, ViewEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
