//! The pagination entry point.

use crate::bounds::{Bounds, KeyBounds};
use crate::config::PagerConfig;
use crate::error::{BoundsError, PageError};
use crate::page::PageSet;
use crate::plan::{backward, forward};
use crate::store::RangeView;

/// Computes pages and navigation cursors over any [`RangeView`].
///
/// A paginator is cheap, immutable and stateless between calls: it holds
/// only the validated configuration and the fixed key range. One call issues
/// one to three range scans and either returns a complete [`PageSet`] or the
/// first failure - never a partial result.
///
/// # Example
///
/// ```
/// use skipstone::{MemView, PageCursor, PagerConfig, Paginator, ViewRow};
///
/// let view: MemView<i64, i64, ()> =
///     MemView::from_rows((1..=5).map(|k| ViewRow::new(k, k * 10)).collect());
///
/// let config = PagerConfig::builder().page_size(3).build().unwrap();
/// let pager = Paginator::new(config);
///
/// let page = pager.page(&view, None).unwrap();
/// assert_eq!(page.entries().len(), 3);
/// assert_eq!(page.next(), &[PageCursor::Key(4)]);
/// assert!(page.previous().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<K> {
    config: PagerConfig,
    range: KeyBounds<K>,
}

impl<K: Ord + Clone> Paginator<K> {
    /// A paginator over the whole view.
    pub fn new(config: PagerConfig) -> Self {
        Self {
            config,
            range: KeyBounds::open(),
        }
    }

    /// Restrict every page to the given key range.
    #[must_use]
    pub fn with_range(mut self, range: KeyBounds<K>) -> Self {
        self.range = range;
        self
    }

    /// The validated configuration.
    pub const fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Paginate from a requested start key; absent means the first page.
    pub fn page<S>(
        &self,
        view: &S,
        start: Option<K>,
    ) -> Result<PageSet<K, S::Value, S::Doc>, PageError<S::Error>>
    where
        S: RangeView<Key = K>,
    {
        self.page_within(view, Bounds::resolve(&self.range, start))
    }

    /// Paginate with bounds derived per request - for views whose reachable
    /// range itself depends on the request, e.g. composite `[group, seq]`
    /// keys where all three bounds share the group prefix.
    pub fn page_within<S>(
        &self,
        view: &S,
        bounds: Bounds<K>,
    ) -> Result<PageSet<K, S::Value, S::Doc>, PageError<S::Error>>
    where
        S: RangeView<Key = K>,
    {
        // The planners are independent; run both, fail on the first error,
        // assemble only when everything came back.
        let (entries, next) = match forward::plan(view, &self.config, &bounds) {
            Ok(planned) => planned,
            Err(PageError::Empty) if self.config.allow_empty() => (Vec::new(), Vec::new()),
            Err(err) => return Err(err),
        };
        let previous = backward::plan(view, &self.config, &bounds)?;
        Ok(PageSet::new(previous, entries, next))
    }

    /// Paginate with a fallible bounds resolver - the hook for callers whose
    /// start key comes from an asynchronous or failable source. Resolver
    /// failure surfaces as [`PageError::Bounds`] before any scan is issued.
    pub fn page_with<S, F>(
        &self,
        view: &S,
        resolve: F,
    ) -> Result<PageSet<K, S::Value, S::Doc>, PageError<S::Error>>
    where
        S: RangeView<Key = K>,
        F: FnOnce() -> Result<Bounds<K>, BoundsError>,
    {
        let bounds = resolve().map_err(PageError::Bounds)?;
        self.page_within(view, bounds)
    }
}
