use folio_core::catalog::builtin;
use folio_core::{
    extract_tags, filter_items, toggle_tag, Catalog, FilterState, ItemId, Media, Post, Project,
};
use std::collections::BTreeSet;

fn sample_projects() -> Catalog<Project> {
    Catalog::new(vec![
        Project::new(1, "A", "", &["IoT", "Embedded"], Media::image_placeholder()),
        Project::new(2, "B", "", &["ML", "Vision"], Media::video_placeholder()),
        Project::new(3, "C", "", &["IoT", "ML"], Media::image_placeholder()),
    ])
    .unwrap()
}

fn visible_ids(catalog: &Catalog<Project>, state: &FilterState) -> Vec<u32> {
    filter_items(catalog.items(), state)
        .iter()
        .map(|project| project.id.0)
        .collect()
}

#[test]
fn empty_filter_shows_full_catalog_in_order() {
    let catalog = sample_projects();
    assert_eq!(visible_ids(&catalog, &FilterState::new()), vec![1, 2, 3]);
}

#[test]
fn single_tag_keeps_items_carrying_it() {
    let catalog = sample_projects();
    let state = FilterState::with_tags(["IoT"]);
    assert_eq!(visible_ids(&catalog, &state), vec![1, 3]);
}

#[test]
fn multiple_tags_intersect_instead_of_union() {
    let catalog = sample_projects();
    let state = FilterState::with_tags(["IoT", "ML"]);
    assert_eq!(visible_ids(&catalog, &state), vec![3]);
}

#[test]
fn unknown_tag_yields_empty_result() {
    let catalog = sample_projects();
    let state = FilterState::with_tags(["Audio"]);
    assert!(visible_ids(&catalog, &state).is_empty());
}

#[test]
fn tags_are_matched_case_sensitively() {
    let catalog = sample_projects();
    let state = FilterState::with_tags(["iot"]);
    assert!(visible_ids(&catalog, &state).is_empty());
}

#[test]
fn vocabulary_is_sorted_and_deduplicated() {
    let tags = extract_tags(builtin::projects().items());
    assert_eq!(
        tags,
        vec!["C++", "Control", "Embedded", "IoT", "ML", "Python", "Robotics", "Stm32", "Vision"]
    );
    assert!(tags.windows(2).all(|pair| pair[0] < pair[1]));

    let post_tags = extract_tags(builtin::posts().items());
    assert_eq!(
        post_tags,
        vec!["Audio", "Control", "Embedded", "IoT", "ML", "Robotics"]
    );
}

#[test]
fn toggle_twice_restores_original_set() {
    let start: BTreeSet<String> = ["IoT", "ML"].iter().map(|t| t.to_string()).collect();
    for tag in ["IoT", "Audio", ""] {
        assert_eq!(toggle_tag(&toggle_tag(&start, tag), tag), start);
    }
}

#[test]
fn adding_tags_never_grows_the_result() {
    let catalog = builtin::projects();
    let vocabulary = extract_tags(catalog.items());

    // Walk every subset of the vocabulary and compare against each superset
    // obtained by adding one more tag.
    for mask in 0u32..(1 << vocabulary.len()) {
        let subset: Vec<&String> = vocabulary
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, tag)| tag)
            .collect();
        let base = FilterState::with_tags(subset.iter().map(|t| t.as_str()));
        let base_len = filter_items(catalog.items(), &base).len();

        for extra in &vocabulary {
            let mut narrowed = base.clone();
            if !narrowed.is_tag_active(extra) {
                narrowed.toggle(extra);
            }
            assert!(filter_items(catalog.items(), &narrowed).len() <= base_len);
        }
    }
}

#[test]
fn query_matching_ignores_case() {
    let posts = builtin::posts();
    let upper = filter_items(posts.items(), &FilterState::new().with_query("PID"));
    let lower = filter_items(posts.items(), &FilterState::new().with_query("pid"));
    assert_eq!(upper, lower);
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, ItemId(1));
}

#[test]
fn query_searches_post_excerpts() {
    let posts = builtin::posts();
    let hits = filter_items(posts.items(), &FilterState::new().with_query("mfcc"));
    let ids: Vec<ItemId> = hits.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![ItemId(3)]);
}

#[test]
fn tags_and_query_must_both_hold() {
    let posts = builtin::posts();
    let state = FilterState::with_tags(["ML"]).with_query("esp32");
    assert!(filter_items(posts.items(), &state).is_empty());

    let state = FilterState::with_tags(["IoT"]).with_query("esp32");
    let hits: Vec<&Post> = filter_items(posts.items(), &state);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "ESP32 Power Profiling");
}

#[test]
fn short_query_preserves_catalog_order() {
    let posts = builtin::posts();
    let hits = filter_items(posts.items(), &FilterState::new().with_query("o"));
    let ids: Vec<u32> = hits.iter().map(|post| post.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
