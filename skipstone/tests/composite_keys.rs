//! Composite `[group, timestamp]` keys with bounds derived per request: all
//! three bounds share the group prefix, so one paginator serves any group
//! and pages never leak across group boundaries.

use serde::Serialize;
use skipstone::{Bounds, MemView, PageCursor, PagerConfig, Paginator, ViewRow};

type Key = [i64; 2];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Event {
    value: String,
}

fn event(value: &str) -> Event {
    Event {
        value: value.to_string(),
    }
}

fn grouped_view() -> MemView<Key, (), Event> {
    MemView::from_rows(vec![
        ViewRow::new([1, 123], ()).with_doc(event("Bar1")),
        ViewRow::new([2, 124], ()).with_doc(event("Foo1")),
        ViewRow::new([2, 125], ()).with_doc(event("Foo2")),
        ViewRow::new([2, 126], ()).with_doc(event("Foo3")),
        ViewRow::new([2, 127], ()).with_doc(event("Foo4")),
        ViewRow::new([2, 128], ()).with_doc(event("Foo5")),
        ViewRow::new([3, 129], ()).with_doc(event("Baz1")),
    ])
}

fn pager() -> Paginator<Key> {
    Paginator::new(
        PagerConfig::builder()
            .page_size(3)
            .use_docs(true)
            .build()
            .unwrap(),
    )
}

/// The request-derived bounds: group prefix on every component, timestamp 0
/// standing in for "from the start of the group".
fn group_bounds(group: i64, start: Option<i64>) -> Bounds<Key> {
    Bounds {
        lowest: Some([group, 0]),
        start: Some([group, start.unwrap_or(0)]),
        uppermost: Some([group, i64::MAX]),
    }
}

fn values(page: &skipstone::PageSet<Key, (), Event>) -> Vec<String> {
    page.entries()
        .iter()
        .filter_map(|row| row.doc.as_ref().map(|doc| doc.value.clone()))
        .collect()
}

#[test]
fn group_without_start_returns_its_first_page() {
    let page = pager()
        .page_within(&grouped_view(), group_bounds(2, None))
        .unwrap();
    assert!(page.previous().is_empty());
    assert_eq!(values(&page), vec!["Foo1", "Foo2", "Foo3"]);
    assert_eq!(page.next(), &[PageCursor::Key([2, 127])]);
}

#[test]
fn start_within_the_group_pages_forward() {
    let page = pager()
        .page_within(&grouped_view(), group_bounds(2, Some(125)))
        .unwrap();
    assert_eq!(page.previous(), &[PageCursor::SequenceStart]);
    assert_eq!(values(&page), vec!["Foo2", "Foo3", "Foo4"]);
    assert_eq!(page.next(), &[PageCursor::Key([2, 128])]);
}

#[test]
fn last_full_window_has_no_next_link() {
    let page = pager()
        .page_within(&grouped_view(), group_bounds(2, Some(126)))
        .unwrap();
    assert_eq!(page.previous(), &[PageCursor::SequenceStart]);
    assert_eq!(values(&page), vec!["Foo3", "Foo4", "Foo5"]);
    assert!(page.next().is_empty());
}

#[test]
fn deep_start_jumps_a_full_page_back_within_the_group() {
    let page = pager()
        .page_within(&grouped_view(), group_bounds(2, Some(128)))
        .unwrap();
    assert_eq!(page.previous(), &[PageCursor::Key([2, 125])]);
    assert_eq!(values(&page), vec!["Foo5"]);
    assert!(page.next().is_empty());
}

#[test]
fn pages_never_cross_group_boundaries() {
    // Group 1 holds a single event; neighbors in other groups must not
    // bleed into its page or its cursors.
    let page = pager()
        .page_within(&grouped_view(), group_bounds(1, None))
        .unwrap();
    assert_eq!(values(&page), vec!["Bar1"]);
    assert!(page.next().is_empty());
    assert!(page.previous().is_empty());
}
