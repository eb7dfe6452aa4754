//! Pagination failures.

use std::fmt;

/// Error produced by a caller-supplied bounds resolver.
pub type BoundsError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of one pagination computation.
///
/// `E` is the store's scan error, propagated verbatim. Nothing here is
/// retried; the invocation boundary decides what the caller sees.
#[derive(Debug)]
pub enum PageError<E> {
    /// Deriving the bounds failed before any scan was issued.
    Bounds(BoundsError),
    /// The resolved start key matched no rows. Downgraded to an empty page
    /// when the configuration allows empty results.
    Empty,
    /// A range scan failed.
    Scan(E),
}

impl<E: fmt::Display> fmt::Display for PageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(err) => write!(f, "bounds resolution failed: {err}"),
            Self::Empty => write!(f, "no rows found for the requested page"),
            Self::Scan(err) => write!(f, "range scan failed: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for PageError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err.as_ref()),
            Self::Empty => None,
            Self::Scan(err) => Some(err),
        }
    }
}
