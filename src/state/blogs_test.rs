use super::*;

fn blog(id: &str, title: &str) -> Blog {
    Blog {
        id: id.to_owned(),
        title: title.to_owned(),
        category: "News".to_owned(),
        text: "body".to_owned(),
        extra: serde_json::Map::new(),
    }
}

fn ids(state: &BlogListState) -> Vec<&str> {
    state.items.iter().map(|b| b.id.as_str()).collect()
}

// =============================================================
// Defaults and full fetch
// =============================================================

#[test]
fn starts_empty_and_idle() {
    let state = BlogListState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn full_fetch_replaces_everything_and_clears_loading() {
    let mut state = BlogListState {
        items: vec![blog("stale", "old")],
        loading: true,
    };
    state.replace_all(vec![blog("a", "one"), blog("b", "two")]);
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert!(!state.loading);
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn created_post_goes_first() {
    let mut state = BlogListState::default();
    state.replace_all(vec![blog("a", "one"), blog("b", "two")]);
    state.insert_new(blog("c", "three"));
    assert_eq!(ids(&state), vec!["c", "a", "b"]);
}

#[test]
fn update_swaps_the_matching_post_in_place() {
    let mut state = BlogListState::default();
    state.replace_all(vec![blog("a", "one"), blog("b", "two")]);

    state.apply_update(blog("a", "rewritten"));

    assert_eq!(ids(&state), vec!["a", "b"]);
    assert_eq!(state.items[0].title, "rewritten");
    assert_eq!(state.items[1], blog("b", "two"));
}

#[test]
fn update_for_an_unknown_id_changes_nothing() {
    let mut state = BlogListState::default();
    state.replace_all(vec![blog("a", "one")]);
    let before = state.clone();

    state.apply_update(blog("ghost", "nope"));

    assert_eq!(state, before);
}

#[test]
fn remove_evicts_only_the_matching_id() {
    let mut state = BlogListState::default();
    state.replace_all(vec![blog("a", "one"), blog("b", "two")]);

    state.apply_remove("a");

    assert_eq!(ids(&state), vec!["b"]);
}

#[test]
fn remove_for_an_unknown_id_changes_nothing() {
    let mut state = BlogListState::default();
    state.replace_all(vec![blog("a", "one")]);
    let before = state.clone();

    state.apply_remove("ghost");

    assert_eq!(state, before);
}
