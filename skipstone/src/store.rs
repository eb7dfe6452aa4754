//! The range-scan collaborator contract.
//!
//! The paginator never owns data. It issues [`Scan`] requests against a
//! [`RangeView`] - an ordered key/value index owned by the caller's store -
//! and works only with the rows that come back. Anything that can answer an
//! ordered range scan can drive the paginator: an in-memory map
//! ([`MemView`](crate::MemView)), a SQL index, an LSM/B-tree store, a CouchDB
//! view behind an HTTP client.

/// One row returned by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<K, V, D> {
    /// The row's key in the view's total order.
    pub key: K,
    /// The emitted (or aggregated) value.
    pub value: V,
    /// The full backing document, present only when the scan asked for it.
    pub doc: Option<D>,
}

impl<K, V, D> ViewRow<K, V, D> {
    /// Create a row without a document payload.
    pub const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            doc: None,
        }
    }

    /// Attach the full backing document.
    #[must_use]
    pub fn with_doc(mut self, doc: D) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A single range-scan request.
///
/// Key bounds are inclusive at both ends. When `descending` is set the scan
/// runs from `start_key` *down* to `end_key`, so `start_key` is the upper
/// bound and `end_key` the lower one - the same convention CouchDB-style view
/// queries use. An absent bound leaves that end of the range open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<K> {
    /// Key the scan starts from (inclusive). Absent means the first key in
    /// scan direction.
    pub start_key: Option<K>,
    /// Key the scan stops at (inclusive). Absent means the last key in scan
    /// direction.
    pub end_key: Option<K>,
    /// Maximum number of rows to return.
    pub limit: usize,
    /// Fetch the full backing document for each row.
    pub include_docs: bool,
    /// Scan in reverse key order.
    pub descending: bool,
    /// Collapse equal keys into one row with an aggregated value.
    pub grouped: bool,
}

impl<K> Scan<K> {
    /// An ascending scan over `[start_key, end_key]` returning at most
    /// `limit` rows.
    pub const fn forward(start_key: Option<K>, end_key: Option<K>, limit: usize) -> Self {
        Self {
            start_key,
            end_key,
            limit,
            include_docs: false,
            descending: false,
            grouped: false,
        }
    }

    /// A descending scan from `start_key` down to `end_key` returning at
    /// most `limit` rows.
    pub const fn backward(start_key: Option<K>, end_key: Option<K>, limit: usize) -> Self {
        Self {
            start_key,
            end_key,
            limit,
            include_docs: false,
            descending: true,
            grouped: false,
        }
    }

    /// Request the full backing documents.
    #[must_use]
    pub const fn include_docs(mut self) -> Self {
        self.include_docs = true;
        self
    }

    /// Request per-key aggregation.
    #[must_use]
    pub const fn grouped(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }
}

/// An ordered, range-queryable key/value view.
///
/// Implementations must return rows in key order (reversed when the scan is
/// descending) and consistent with a single logical snapshot per call.
/// Transport, retries and timeouts are the store's business; the paginator
/// propagates [`Self::Error`] verbatim and never retries.
pub trait RangeView {
    /// Key type of the view's total order. Composite keys are ordinary
    /// tuples or arrays - anything `Ord` works.
    type Key: Ord + Clone;
    /// Emitted (or aggregated) value type.
    type Value;
    /// Full document type, fetched only when a scan requests it.
    type Doc;
    /// Store-defined scan failure.
    type Error;

    /// Run one range scan and return the matching rows.
    fn scan(
        &self,
        scan: Scan<Self::Key>,
    ) -> Result<Vec<ViewRow<Self::Key, Self::Value, Self::Doc>>, Self::Error>;
}
