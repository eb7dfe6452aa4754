//! Key bounds and per-call resolution.

/// Fixed range restriction for a paginator: the lowest and uppermost keys a
/// page may ever contain. Either end may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBounds<K> {
    /// Lowest key of the explorable range (inclusive).
    pub lowest: Option<K>,
    /// Uppermost key of the explorable range (inclusive).
    pub uppermost: Option<K>,
}

impl<K> KeyBounds<K> {
    /// A fully open range.
    pub const fn open() -> Self {
        Self {
            lowest: None,
            uppermost: None,
        }
    }

    /// A range restricted at both ends.
    pub const fn between(lowest: K, uppermost: K) -> Self {
        Self {
            lowest: Some(lowest),
            uppermost: Some(uppermost),
        }
    }
}

/// Bounds resolved for one pagination call.
///
/// `start` is where the current page begins. An absent requested start key
/// resolves to `lowest` - possibly still absent, meaning the very first
/// entry of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds<K> {
    /// Lowest reachable key (inclusive), if restricted.
    pub lowest: Option<K>,
    /// Start key of the current page.
    pub start: Option<K>,
    /// Uppermost reachable key (inclusive), if restricted.
    pub uppermost: Option<K>,
}

impl<K: Clone + PartialEq> Bounds<K> {
    /// Resolve per-call bounds from the fixed range and a requested start
    /// key.
    pub fn resolve(range: &KeyBounds<K>, start: Option<K>) -> Self {
        Self {
            lowest: range.lowest.clone(),
            start: start.or_else(|| range.lowest.clone()),
            uppermost: range.uppermost.clone(),
        }
    }

    /// True when the current page is the first page - the start key equals
    /// the lower bound, so there is nothing behind it to scan.
    pub fn at_sequence_start(&self) -> bool {
        self.start == self.lowest
    }
}
