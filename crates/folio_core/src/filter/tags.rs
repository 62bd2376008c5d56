//! Tag vocabulary and tag selection helpers.

use crate::model::item::CatalogItem;
use std::collections::BTreeSet;

/// Returns the distinct tags of `items` in ascending order.
///
/// Ordering is plain byte-wise string order, so `C++` sorts before `Control`
/// and uppercase before lowercase.
pub fn extract_tags<T: CatalogItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns a copy of `active` with `tag` flipped.
///
/// The input set is left untouched so callers can compare old and new state.
pub fn toggle_tag(active: &BTreeSet<String>, tag: &str) -> BTreeSet<String> {
    let mut next = active.clone();
    if !next.remove(tag) {
        next.insert(tag.to_string());
    }
    next
}
