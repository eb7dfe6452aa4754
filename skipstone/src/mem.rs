//! In-memory reference view.
//!
//! [`MemView`] is a complete [`RangeView`] over a sorted row list, with
//! optional per-key value aggregation for grouped scans. It exists for
//! tests, benches and demos - production callers bring their own store - but
//! it implements the full scan contract, including inclusive bounds,
//! descending order and grouping, so planner behavior observed against it
//! carries over to real stores.

use std::convert::Infallible;

use crate::store::{RangeView, Scan, ViewRow};

/// Sorted in-memory [`RangeView`].
///
/// Rows with equal keys are legal and represent multiple emitted values per
/// key, as a map/reduce view would produce; a grouped scan collapses them
/// with the configured [`reduce`](Self::with_reduce) function.
///
/// # Example
///
/// ```
/// use skipstone::{MemView, Scan, RangeView, ViewRow};
///
/// let view: MemView<i64, i64, ()> = MemView::from_rows(vec![
///     ViewRow::new(1, 10),
///     ViewRow::new(2, 10),
///     ViewRow::new(2, 15),
/// ])
/// .with_reduce(|values| values.iter().sum());
///
/// let rows = view.scan(Scan::forward(None, None, 10).grouped(true)).unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].value, 25);
/// ```
#[derive(Debug, Clone)]
pub struct MemView<K, V, D> {
    rows: Vec<ViewRow<K, V, D>>,
    reduce: Option<fn(&[V]) -> V>,
}

impl<K: Ord + Clone, V: Clone, D: Clone> MemView<K, V, D> {
    /// Build a view from emitted rows. Rows are sorted by key; input order
    /// is preserved among equal keys.
    pub fn from_rows(mut rows: Vec<ViewRow<K, V, D>>) -> Self {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Self { rows, reduce: None }
    }

    /// Install the value-aggregation function used by grouped scans.
    ///
    /// Without one, a grouped scan keeps the first emitted value of each
    /// key.
    #[must_use]
    pub fn with_reduce(mut self, reduce: fn(&[V]) -> V) -> Self {
        self.reduce = Some(reduce);
        self
    }

    /// Number of emitted rows (before any grouping).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn in_range(&self, key: &K, lower: Option<&K>, upper: Option<&K>) -> bool {
        lower.is_none_or(|l| key >= l) && upper.is_none_or(|u| key <= u)
    }

    fn group(&self, rows: Vec<ViewRow<K, V, D>>) -> Vec<ViewRow<K, V, D>> {
        let mut grouped: Vec<ViewRow<K, V, D>> = Vec::new();
        let mut pending: Vec<V> = Vec::new();
        let mut current: Option<K> = None;

        let flush =
            |grouped: &mut Vec<ViewRow<K, V, D>>, key: Option<K>, pending: &mut Vec<V>| {
                let Some(key) = key else { return };
                let value = match (self.reduce, pending.len()) {
                    (Some(reduce), n) if n > 1 => reduce(pending),
                    _ => pending[0].clone(),
                };
                grouped.push(ViewRow::new(key, value));
                pending.clear();
            };

        for row in rows {
            if current.as_ref() != Some(&row.key) {
                flush(&mut grouped, current.take(), &mut pending);
                current = Some(row.key.clone());
            }
            pending.push(row.value);
        }
        flush(&mut grouped, current, &mut pending);
        grouped
    }
}

impl<K: Ord + Clone, V: Clone, D: Clone> RangeView for MemView<K, V, D> {
    type Key = K;
    type Value = V;
    type Doc = D;
    type Error = Infallible;

    fn scan(&self, scan: Scan<K>) -> Result<Vec<ViewRow<K, V, D>>, Infallible> {
        // In a descending scan the start key is the upper end of the range.
        let (lower, upper) = if scan.descending {
            (scan.end_key.as_ref(), scan.start_key.as_ref())
        } else {
            (scan.start_key.as_ref(), scan.end_key.as_ref())
        };

        let mut rows: Vec<ViewRow<K, V, D>> = self
            .rows
            .iter()
            .filter(|row| self.in_range(&row.key, lower, upper))
            .cloned()
            .collect();

        if scan.grouped {
            rows = self.group(rows);
        }
        if scan.descending {
            rows.reverse();
        }
        rows.truncate(scan.limit);
        if !scan.include_docs {
            for row in &mut rows {
                row.doc = None;
            }
        }
        Ok(rows)
    }
}
