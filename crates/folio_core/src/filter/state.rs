//! Filter state and the visibility predicate.

use crate::filter::tags::toggle_tag;
use crate::model::item::CatalogItem;
use serde::Serialize;
use std::collections::BTreeSet;

/// User-selected narrowing of one catalog view.
///
/// Mutated only through explicit actions; every mutation replaces the tag set
/// as a whole, so a `(tags, query)` pair is never observed half-applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    active_tags: BTreeSet<String>,
    query: String,
}

impl FilterState {
    /// Empty state: no tags, empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_tags: tags.into_iter().map(Into::into).collect(),
            query: String::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Returns whether this state is the identity filter.
    pub fn is_empty(&self) -> bool {
        self.active_tags.is_empty() && self.query.is_empty()
    }

    /// Flips `tag` in the active set.
    pub fn toggle(&mut self, tag: &str) {
        self.active_tags = toggle_tag(&self.active_tags, tag);
    }

    /// Replaces the query as typed (no trimming).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clears tags only, keeping the query.
    pub fn clear_tags(&mut self) {
        self.active_tags = BTreeSet::new();
    }

    /// Clears tags and query in one step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// AND tag condition: every active tag must be declared on the item.
pub fn matches_tags<T: CatalogItem>(item: &T, active_tags: &BTreeSet<String>) -> bool {
    active_tags.iter().all(|tag| item.has_tag(tag))
}

/// Case-insensitive substring test against the item's searchable text.
///
/// An empty query matches everything.
pub fn matches_query<T: CatalogItem>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.searchable_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Returns whether `item` passes both the tag and the text condition.
pub fn is_visible<T: CatalogItem>(item: &T, state: &FilterState) -> bool {
    matches_tags(item, &state.active_tags) && matches_query(item, &state.query)
}

/// Returns the visible items of `items`, in their original order.
pub fn filter_items<'a, T: CatalogItem>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    items.iter().filter(|item| is_visible(*item, state)).collect()
}
