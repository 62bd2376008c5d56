use folio_core::catalog::builtin;
use folio_core::{
    BlogView, Catalog, CatalogView, FilterState, ItemId, Media, Project, ProjectsView, ViewEvent,
};
use std::sync::Arc;

fn sample_view() -> CatalogView<Project> {
    let catalog = Catalog::new(vec![
        Project::new(1, "A", "", &["IoT", "Embedded"], Media::image_placeholder()),
        Project::new(2, "B", "", &["ML", "Vision"], Media::video_placeholder()),
        Project::new(3, "C", "", &["IoT", "ML"], Media::image_placeholder()),
    ])
    .unwrap();
    CatalogView::new(Arc::new(catalog))
}

fn visible_ids<T: folio_core::CatalogItem>(view: &CatalogView<T>) -> Vec<u32> {
    view.visible().iter().map(|item| item.id().0).collect()
}

#[test]
fn new_view_starts_unfiltered_and_closed() {
    let view = ProjectsView::new(builtin::projects());
    assert!(view.is_unfiltered());
    assert!(view.filter().is_empty());
    assert!(view.open_item().is_none());
    assert_eq!(visible_ids(&view), vec![1, 2, 3, 4]);
}

#[test]
fn toggling_tags_narrows_then_widens() {
    let mut view = sample_view();
    view.toggle_tag("IoT");
    assert_eq!(visible_ids(&view), vec![1, 3]);
    view.toggle_tag("ML");
    assert_eq!(visible_ids(&view), vec![3]);
    view.toggle_tag("IoT");
    assert_eq!(visible_ids(&view), vec![2, 3]);
    assert!(view.is_tag_active("ML"));
    assert!(!view.is_tag_active("IoT"));
}

#[test]
fn reset_clears_tags_and_query_together() {
    let mut view = BlogView::new(builtin::posts());
    view.toggle_tag("IoT");
    view.set_query("sensor");
    assert!(visible_ids(&view).is_empty());

    view.reset();
    assert_eq!(view.filter(), &FilterState::new());
    assert_eq!(visible_ids(&view), vec![1, 2, 3]);
}

#[test]
fn clear_tags_keeps_typed_query() {
    let mut view = BlogView::new(builtin::posts());
    view.apply(ViewEvent::ToggleTag("ML".to_string()));
    view.apply(ViewEvent::SetQuery("power".to_string()));
    assert!(visible_ids(&view).is_empty());

    view.apply(ViewEvent::ClearTags);
    assert!(view.is_unfiltered());
    assert_eq!(view.filter().query(), "power");
    assert_eq!(visible_ids(&view), vec![2]);
}

#[test]
fn tag_vocabulary_is_recomputed_after_catalog_swap() {
    let mut view = sample_view();
    assert_eq!(view.tags(), ["Embedded", "IoT", "ML", "Vision"]);

    let replacement =
        Catalog::new(vec![Project::new(9, "Z", "", &["Audio"], Media::image_placeholder())])
            .unwrap();
    view.replace_catalog(Arc::new(replacement));
    assert_eq!(view.tags(), ["Audio"]);
    assert_eq!(visible_ids(&view), vec![9]);
}

#[test]
fn catalog_swap_keeps_filter_and_closes_missing_item() {
    let mut view = sample_view();
    view.toggle_tag("IoT");
    view.open(ItemId(3));

    let replacement =
        Catalog::new(vec![Project::new(1, "A2", "", &["IoT"], Media::image_placeholder())])
            .unwrap();
    view.replace_catalog(Arc::new(replacement));

    assert!(view.is_tag_active("IoT"));
    assert!(view.open_item().is_none());
    assert_eq!(visible_ids(&view), vec![1]);
}

#[test]
fn query_edits_bump_revision_once_per_change() {
    let mut view = BlogView::new(builtin::posts());
    view.set_query("t");
    view.set_query("t");
    view.set_query("ti");
    assert_eq!(view.revision(), 2);
}
