//! Structural properties of the pagination algorithm over arbitrary views
//! and configurations.

use proptest::prelude::*;
use skipstone::{MemView, PageCursor, PageError, PagerConfig, Paginator, ViewRow};

fn keyed_view(n: i64) -> MemView<i64, i64, ()> {
    MemView::from_rows((1..=n).map(|k| ViewRow::new(k, k * 10)).collect())
}

proptest! {
    /// A forward walk from the first page visits every key exactly once, in
    /// order, in full pages except possibly the last.
    #[test]
    fn forward_walk_partitions_the_view(
        n in 1i64..60,
        page_size in 1usize..7,
        next_count in 1usize..4,
    ) {
        let view = keyed_view(n);
        let pager = Paginator::new(
            PagerConfig::builder()
                .page_size(page_size)
                .next_count(next_count)
                .build()
                .unwrap(),
        );

        let mut start = None;
        let mut seen = Vec::new();
        loop {
            let page = pager.page(&view, start).unwrap();
            prop_assert!(page.entries().len() <= page_size);
            prop_assert!(page.next().len() <= next_count);
            seen.extend(page.entries().iter().map(|row| row.key));
            match page.next().first() {
                Some(cursor) => {
                    // A page with a successor is always full.
                    prop_assert_eq!(page.entries().len(), page_size);
                    start = cursor.clone().into_start_key();
                    prop_assert!(start.is_some());
                },
                None => break,
            }
        }
        prop_assert_eq!(seen, (1..=n).collect::<Vec<i64>>());
    }

    /// Walking back via the nearest previous cursor retraces the forward
    /// walk's page starts in reverse, ending at the first page.
    #[test]
    fn backward_walk_retraces_page_starts(
        n in 1i64..60,
        page_size in 1usize..7,
    ) {
        let view = keyed_view(n);
        let pager = Paginator::new(
            PagerConfig::builder().page_size(page_size).build().unwrap(),
        );

        // Forward pass: record every page's start key.
        let mut starts = vec![None];
        loop {
            let page = pager.page(&view, starts.last().unwrap().clone()).unwrap();
            match page.next().first() {
                Some(cursor) => starts.push(cursor.clone().into_start_key()),
                None => break,
            }
        }

        // Backward pass from the deepest page.
        let mut position = starts.len() - 1;
        loop {
            let page = pager
                .page(&view, starts[position].clone())
                .unwrap();
            if position == 0 {
                prop_assert!(page.previous().is_empty());
                break;
            }
            let cursor = page.previous().first().unwrap().clone();
            let start = cursor.into_start_key();
            prop_assert_eq!(&start, &starts[position - 1]);
            position -= 1;
        }
    }

    /// Cursor lists never exceed their configured counts, the first page
    /// never reports history, and the start sentinel only ever terminates
    /// the backward list.
    #[test]
    fn cursor_lists_are_bounded_and_well_formed(
        n in 1i64..60,
        page_size in 1usize..7,
        next_count in 0usize..4,
        prev_count in 0usize..4,
        start in proptest::option::of(1i64..70),
    ) {
        let view = keyed_view(n);
        let pager = Paginator::new(
            PagerConfig::builder()
                .page_size(page_size)
                .next_count(next_count)
                .prev_count(prev_count)
                .build()
                .unwrap(),
        );

        let page = match pager.page(&view, start) {
            Ok(page) => page,
            // A start key beyond the data is a legitimate refusal.
            Err(PageError::Empty) => {
                prop_assert!(start.is_some_and(|s| s > n));
                return Ok(());
            },
            Err(err) => {
                return Err(proptest::test_runner::TestCaseError::fail(err.to_string()));
            },
        };

        prop_assert!(page.entries().len() <= page_size);
        prop_assert!(page.next().len() <= next_count);
        prop_assert!(page.previous().len() <= prev_count);
        if start.is_none() {
            prop_assert!(page.previous().is_empty());
        }
        for cursor in page.next() {
            prop_assert!(!cursor.is_sequence_start());
        }
        let sentinel_positions: Vec<usize> = page
            .previous()
            .iter()
            .enumerate()
            .filter(|(_, cursor)| cursor.is_sequence_start())
            .map(|(index, _)| index)
            .collect();
        prop_assert!(
            sentinel_positions.is_empty()
                || sentinel_positions == vec![page.previous().len() - 1]
        );
    }

    /// The computation is read-only and deterministic: repeating a call
    /// against an unchanged view yields an identical result.
    #[test]
    fn repeated_calls_are_idempotent(
        n in 1i64..40,
        page_size in 1usize..7,
        start in proptest::option::of(1i64..40),
    ) {
        let view = keyed_view(n);
        let pager = Paginator::new(
            PagerConfig::builder().page_size(page_size).build().unwrap(),
        );
        let first = pager.page(&view, start);
        let second = pager.page(&view, start);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(PageError::Empty), Err(PageError::Empty)) => {},
            _ => {
                return Err(proptest::test_runner::TestCaseError::fail(
                    "calls diverged".to_string(),
                ));
            },
        }
    }
}
