//! Backward page planner: up to `prev_count` backward cursors from one
//! descending history scan.
//!
//! The scan asks for `prev_count * page_size + 2` rows: the boundary row at
//! the start key itself, the keys of the previous pages, and one probe row
//! past the oldest wanted cursor. A key-stepped cursor alone cannot tell
//! "one more real page exists" from "the sequence already ended"; the probe
//! row settles it. When the scan comes back shorter than its limit it was
//! cut off by the lower bound, and the oldest reachable page is the first
//! page - reported as [`PageCursor::SequenceStart`] instead of a key.

use crate::bounds::Bounds;
use crate::config::PagerConfig;
use crate::cursor::PageCursor;
use crate::error::PageError;
use crate::store::{RangeView, Scan};

/// Compute the backward cursors for the page starting at `bounds.start`.
pub(crate) fn plan<S: RangeView>(
    view: &S,
    config: &PagerConfig,
    bounds: &Bounds<S::Key>,
) -> Result<Vec<PageCursor<S::Key>>, PageError<S::Error>> {
    // Nothing behind the first page, and nothing to do without lookbehind.
    if config.prev_count() == 0 || bounds.at_sequence_start() {
        return Ok(Vec::new());
    }

    let limit = config.backward_limit();
    let rows = view
        .scan(
            Scan::backward(bounds.start.clone(), bounds.lowest.clone(), limit)
                .grouped(config.grouped()),
        )
        .map_err(PageError::Scan)?;
    tracing::debug!(rows = rows.len(), limit, "backward history scan");

    let mut cursors: Vec<PageCursor<S::Key>> = rows
        .iter()
        .skip(config.page_size())
        .step_by(config.page_size())
        .take(config.prev_count())
        .map(|row| PageCursor::Key(row.key.clone()))
        .collect();

    // A scan cut short by the lower bound reached the start of the sequence.
    // If the oldest collected cursor is the scan's last row, that page IS the
    // first page; otherwise a partial first page still precedes it.
    if rows.len() > 1 && rows.len() < limit {
        let oldest_is_first_page = match (cursors.last(), rows.last()) {
            (Some(PageCursor::Key(key)), Some(row)) => *key == row.key,
            _ => false,
        };
        if oldest_is_first_page {
            if let Some(oldest) = cursors.last_mut() {
                *oldest = PageCursor::SequenceStart;
            }
        } else {
            cursors.push(PageCursor::SequenceStart);
        }
    }

    Ok(cursors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::KeyBounds;
    use crate::mem::MemView;
    use crate::store::ViewRow;

    fn keys(n: i64) -> MemView<i64, i64, ()> {
        MemView::from_rows((1..=n).map(|k| ViewRow::new(k, k * 10)).collect())
    }

    fn config(page_size: usize, prev_count: usize) -> PagerConfig {
        PagerConfig::builder()
            .page_size(page_size)
            .prev_count(prev_count)
            .build()
            .unwrap()
    }

    fn bounds(start: Option<i64>) -> Bounds<i64> {
        Bounds::resolve(&KeyBounds::open(), start)
    }

    #[test]
    fn test_first_page_short_circuits() {
        let cursors = plan(&keys(5), &config(3, 1), &bounds(None)).unwrap();
        assert!(cursors.is_empty());
    }

    #[test]
    fn test_start_equal_to_lowest_short_circuits() {
        let range = KeyBounds::between(1, 100);
        let cursors = plan(&keys(5), &config(3, 1), &Bounds::resolve(&range, Some(1))).unwrap();
        assert!(cursors.is_empty());
    }

    #[test]
    fn test_zero_prev_count_short_circuits() {
        let cursors = plan(&keys(5), &config(3, 0), &bounds(Some(5))).unwrap();
        assert!(cursors.is_empty());
    }

    #[test]
    fn test_full_page_behind_yields_its_key() {
        // Pages of 3 behind key 5: [2,3,4], then a partial [1]. The scan
        // fills its whole limit, so the probe row proves page [2..] is real.
        let cursors = plan(&keys(5), &config(3, 1), &bounds(Some(5))).unwrap();
        assert_eq!(cursors, vec![PageCursor::Key(2)]);
    }

    #[test]
    fn test_exact_first_page_behind_becomes_sentinel() {
        // Behind key 4 lies exactly one full page [1,2,3] - the first page.
        let cursors = plan(&keys(5), &config(3, 1), &bounds(Some(4))).unwrap();
        assert_eq!(cursors, vec![PageCursor::SequenceStart]);
    }

    #[test]
    fn test_partial_first_page_behind_becomes_sentinel() {
        // Behind key 2 lies only key 1 - a partial first page.
        let cursors = plan(&keys(5), &config(3, 1), &bounds(Some(2))).unwrap();
        assert_eq!(cursors, vec![PageCursor::SequenceStart]);
    }

    #[test]
    fn test_no_rows_behind_yields_nothing() {
        // Key 1 is the first key; the descending scan returns only the
        // boundary row.
        let cursors = plan(&keys(5), &config(3, 1), &bounds(Some(1))).unwrap();
        assert!(cursors.is_empty());
    }

    #[test]
    fn test_deep_history_is_limited_to_prev_count() {
        let cursors = plan(&keys(20), &config(3, 2), &bounds(Some(20))).unwrap();
        assert_eq!(cursors, vec![PageCursor::Key(17), PageCursor::Key(14)]);
    }

    #[test]
    fn test_trailing_sentinel_after_real_cursors() {
        // Behind key 20 with pages of 3: [17..], [14..], then 13 more keys.
        // With prev_count high enough the walk reaches the partial first
        // page [1] and appends the sentinel after the real cursors.
        let cursors = plan(&keys(20), &config(3, 7), &bounds(Some(20))).unwrap();
        assert_eq!(
            cursors,
            vec![
                PageCursor::Key(17),
                PageCursor::Key(14),
                PageCursor::Key(11),
                PageCursor::Key(8),
                PageCursor::Key(5),
                PageCursor::Key(2),
                PageCursor::SequenceStart,
            ]
        );
    }

    #[test]
    fn test_sentinel_replaces_cursor_landing_on_first_key() {
        // Behind key 19 the pages are [16..], [13..], ..., [1..]: the walk
        // lands exactly on key 1, so the last cursor IS the first page.
        let cursors = plan(&keys(19), &config(3, 6), &bounds(Some(19))).unwrap();
        assert_eq!(
            cursors,
            vec![
                PageCursor::Key(16),
                PageCursor::Key(13),
                PageCursor::Key(10),
                PageCursor::Key(7),
                PageCursor::Key(4),
                PageCursor::SequenceStart,
            ]
        );
    }

    #[test]
    fn test_lowest_bound_stops_the_walk() {
        let range = KeyBounds::between(3, 100);
        let cursors = plan(&keys(9), &config(2, 3), &Bounds::resolve(&range, Some(8))).unwrap();
        // Behind 8 within [3,..]: pages [6,7], [4,5], partial [3]... the
        // walk steps 6, 4 and the remaining row 3 is a shorter-than-page
        // first page, reported as the sentinel.
        assert_eq!(
            cursors,
            vec![
                PageCursor::Key(6),
                PageCursor::Key(4),
                PageCursor::SequenceStart,
            ]
        );
    }
}
