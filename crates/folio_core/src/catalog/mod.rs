//! Immutable item catalogs and built-in site content.
//!
//! # Responsibility
//! - Validate catalog construction once, so views can trust identity lookups.
//! - Provide the built-in project/post catalogs and profile content.
//!
//! # Invariants
//! - `id` values are unique within one catalog.
//! - Titles are non-empty and tags are non-blank.
//! - A catalog never changes after construction; views swap whole catalogs.

use crate::model::item::{CatalogItem, ItemId};
use log::warn;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod builtin;
pub mod profile;

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items share the same `id`.
    DuplicateId(ItemId),
    /// Item title is empty after trimming.
    EmptyTitle(ItemId),
    /// Item declares an empty or whitespace-only tag.
    BlankTag(ItemId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate catalog item id: {id}"),
            Self::EmptyTitle(id) => write!(f, "catalog item {id} has an empty title"),
            Self::BlankTag(id) => write!(f, "catalog item {id} declares a blank tag"),
        }
    }
}

impl Error for CatalogError {}

impl CatalogError {
    /// Stable reason code used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DuplicateId(_) => "duplicate_id",
            Self::EmptyTitle(_) => "empty_title",
            Self::BlankTag(_) => "blank_tag",
        }
    }

    /// Id of the offending item.
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::DuplicateId(id) | Self::EmptyTitle(id) | Self::BlankTag(id) => *id,
        }
    }
}

/// Ordered, validated collection of catalog items.
///
/// Item order is the display order; filtering never reorders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Builds a catalog after checking identity and label invariants.
    ///
    /// # Errors
    /// - `DuplicateId` when two items share an id.
    /// - `EmptyTitle` / `BlankTag` for malformed items.
    pub fn new(items: Vec<T>) -> CatalogResult<Self> {
        if let Err(err) = validate_items(&items) {
            warn!(
                "event=catalog_invalid module=catalog status=error section={} reason={} id={}",
                T::SECTION,
                err.reason(),
                err.item_id()
            );
            return Err(err);
        }
        Ok(Self { items })
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Looks up one item by id.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_items<T: CatalogItem>(items: &[T]) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for item in items {
        let id = item.id();
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id));
        }
        if item.title().trim().is_empty() {
            return Err(CatalogError::EmptyTitle(id));
        }
        if item.tags().iter().any(|tag| tag.trim().is_empty()) {
            return Err(CatalogError::BlankTag(id));
        }
    }
    Ok(())
}
