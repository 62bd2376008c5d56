//! Catalog view session.
//!
//! A `CatalogView` is created when a section mounts and dropped when it
//! unmounts. It owns no external resources.

use crate::catalog::Catalog;
use crate::filter::{extract_tags, is_visible, FilterState};
use crate::model::item::{CatalogItem, ItemId, Post, Project};
use crate::overlay::Overlay;
use log::{debug, warn};
use once_cell::unsync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Project gallery session.
pub type ProjectsView = CatalogView<Project>;
/// Blog list session.
pub type BlogView = CatalogView<Post>;

/// Discrete user action applied to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Tag chip clicked.
    ToggleTag(String),
    /// Search input edited.
    SetQuery(String),
    /// "All" chip clicked: clears tags, keeps the query.
    ClearTags,
    /// Reset button: clears tags and query.
    Reset,
    /// Detail overlay requested for one item.
    Open(ItemId),
    /// Close button in the overlay.
    Close,
    /// Escape key or click outside the overlay.
    Cancel,
}

/// View-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Requested item is not part of the view's catalog.
    UnknownItem { section: &'static str, id: ItemId },
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem { section, id } => {
                write!(f, "item {id} not found in {section} catalog")
            }
        }
    }
}

impl Error for ViewError {}

/// One interactive session over a catalog.
pub struct CatalogView<T: CatalogItem> {
    catalog: Arc<Catalog<T>>,
    filter: FilterState,
    overlay: Overlay,
    revision: u64,
    tags_memo: OnceCell<Vec<String>>,
    visible_memo: OnceCell<Vec<usize>>,
}

impl<T: CatalogItem> CatalogView<T> {
    /// Opens a session with an empty filter and a closed overlay.
    pub fn new(catalog: Arc<Catalog<T>>) -> Self {
        debug!(
            "event=view_open module=service status=ok section={} items={}",
            T::SECTION,
            catalog.len()
        );
        Self {
            catalog,
            filter: FilterState::new(),
            overlay: Overlay::Closed,
            revision: 0,
            tags_memo: OnceCell::new(),
            visible_memo: OnceCell::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog<T>> {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Monotonic counter bumped on every observable state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sorted tag vocabulary of the current catalog (memoized).
    pub fn tags(&self) -> &[String] {
        self.tags_memo.get_or_init(|| extract_tags(self.catalog.items()))
    }

    /// Visible items in catalog order (memoized per filter state).
    pub fn visible(&self) -> Vec<&T> {
        let items = self.catalog.items();
        self.visible_memo
            .get_or_init(|| {
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| is_visible(*item, &self.filter))
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .iter()
            .map(|idx| &items[*idx])
            .collect()
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.filter.is_tag_active(tag)
    }

    /// Whether no tag is selected ("All" chip highlighted).
    pub fn is_unfiltered(&self) -> bool {
        self.filter.active_tags().is_empty()
    }

    /// Item currently shown in the detail overlay.
    pub fn open_item(&self) -> Option<&T> {
        self.overlay.open_id().and_then(|id| self.catalog.get(id))
    }

    /// Applies one user action atomically.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ToggleTag(tag) => {
                let mut next = self.filter.clone();
                next.toggle(&tag);
                self.replace_filter(next);
            }
            ViewEvent::SetQuery(query) => {
                let mut next = self.filter.clone();
                next.set_query(query);
                self.replace_filter(next);
            }
            ViewEvent::ClearTags => {
                let mut next = self.filter.clone();
                next.clear_tags();
                self.replace_filter(next);
            }
            ViewEvent::Reset => self.replace_filter(FilterState::new()),
            ViewEvent::Open(id) => self.open(id),
            ViewEvent::Close => self.set_overlay(Overlay::Closed),
            ViewEvent::Cancel => {
                let mut next = self.overlay;
                next.cancel();
                self.set_overlay(next);
            }
        }
    }

    /// Convenience for `apply(ViewEvent::ToggleTag(..))`.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.apply(ViewEvent::ToggleTag(tag.to_string()));
    }

    pub fn set_query(&mut self, query: &str) {
        self.apply(ViewEvent::SetQuery(query.to_string()));
    }

    pub fn reset(&mut self) {
        self.apply(ViewEvent::Reset);
    }

    /// Opens `id` in the detail overlay.
    ///
    /// An id outside the catalog is a caller bug: it asserts in debug builds
    /// and leaves the overlay unchanged in release builds.
    pub fn open(&mut self, id: ItemId) {
        if let Err(err) = self.try_open(id) {
            warn!(
                "event=overlay_open module=service status=error section={} id={} reason=unknown_item",
                T::SECTION,
                id
            );
            debug_assert!(false, "{err}");
        }
    }

    /// Opens `id`, reporting unknown ids instead of asserting.
    ///
    /// # Errors
    /// - `UnknownItem` when `id` is not in the catalog; state is unchanged.
    pub fn try_open(&mut self, id: ItemId) -> Result<(), ViewError> {
        if !self.catalog.contains(id) {
            return Err(ViewError::UnknownItem {
                section: T::SECTION,
                id,
            });
        }
        let mut next = self.overlay;
        next.open(id);
        self.set_overlay(next);
        Ok(())
    }

    pub fn close(&mut self) {
        self.apply(ViewEvent::Close);
    }

    /// Swaps in another catalog and drops all derived state.
    ///
    /// The filter is kept; an open item missing from the new catalog closes.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog<T>>) {
        self.catalog = catalog;
        self.tags_memo = OnceCell::new();
        self.visible_memo = OnceCell::new();
        if let Some(id) = self.overlay.open_id() {
            if !self.catalog.contains(id) {
                self.overlay = Overlay::Closed;
            }
        }
        self.revision += 1;
        debug!(
            "event=catalog_replace module=service status=ok section={} items={}",
            T::SECTION,
            self.catalog.len()
        );
    }

    fn replace_filter(&mut self, next: FilterState) {
        if next == self.filter {
            return;
        }
        self.filter = next;
        self.visible_memo = OnceCell::new();
        self.revision += 1;
        debug!(
            "event=filter_change module=service status=ok section={} tags={} query_len={}",
            T::SECTION,
            self.filter.active_tags().len(),
            self.filter.query().chars().count()
        );
    }

    fn set_overlay(&mut self, next: Overlay) {
        if next == self.overlay {
            return;
        }
        self.overlay = next;
        self.revision += 1;
    }
}
