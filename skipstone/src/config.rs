//! Pager configuration.
//!
//! All options are validated once, at build time. A paginator constructed
//! from a [`PagerConfig`] can compute every scan limit it will ever need with
//! plain arithmetic - the builder rejects any combination that could
//! overflow, so invalid configurations fail closed before the first request
//! is served.

use std::fmt;

/// Default number of entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Validated pagination options.
///
/// # Example
///
/// ```
/// use skipstone::PagerConfig;
///
/// let config = PagerConfig::builder()
///     .page_size(25)
///     .next_count(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.page_size(), 25);
/// assert_eq!(config.next_count(), 3);
/// // prev_count follows next_count unless set explicitly
/// assert_eq!(config.prev_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    page_size: usize,
    next_count: usize,
    prev_count: usize,
    use_docs: bool,
    grouped: bool,
    allow_empty: bool,
}

impl PagerConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> PagerConfigBuilder {
        PagerConfigBuilder::new()
    }

    /// Number of entries per page. Always ≥ 1.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of forward page cursors to compute.
    pub const fn next_count(&self) -> usize {
        self.next_count
    }

    /// Number of backward page cursors to compute.
    pub const fn prev_count(&self) -> usize {
        self.prev_count
    }

    /// Whether pages carry full documents instead of aggregated values.
    pub const fn use_docs(&self) -> bool {
        self.use_docs
    }

    /// Whether scans aggregate values per key.
    pub const fn grouped(&self) -> bool {
        self.grouped
    }

    /// Whether an empty current page is a valid result rather than an error.
    pub const fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Limit of the combined page-and-lookahead scan in value mode:
    /// `page_size * next_count + 1`, or just `page_size` when no lookahead
    /// is requested.
    pub(crate) const fn forward_limit(&self) -> usize {
        if self.next_count == 0 {
            self.page_size
        } else {
            self.page_size * self.next_count + 1
        }
    }

    /// Limit of the cursor-only lookahead scan in document mode:
    /// `page_size * (next_count - 1) + 2`. Only meaningful when
    /// `next_count > 0`; the planner never issues this scan otherwise.
    pub(crate) const fn lookahead_limit(&self) -> usize {
        self.page_size * (self.next_count.saturating_sub(1)) + 2
    }

    /// Limit of the descending history scan: `prev_count * page_size + 2`.
    /// The two extra rows are the boundary row at the start key and the probe
    /// row that disambiguates the start of the sequence.
    pub(crate) const fn backward_limit(&self) -> usize {
        self.prev_count * self.page_size + 2
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            next_count: 1,
            prev_count: 1,
            use_docs: false,
            grouped: true,
            allow_empty: false,
        }
    }
}

/// Builder for [`PagerConfig`].
#[derive(Debug, Clone, Default)]
pub struct PagerConfigBuilder {
    page_size: Option<usize>,
    next_count: Option<usize>,
    prev_count: Option<usize>,
    use_docs: bool,
    grouped: Option<bool>,
    allow_empty: bool,
}

impl PagerConfigBuilder {
    /// New builder with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries per page (default 20, must be ≥ 1).
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Forward cursors to compute (default 1).
    #[must_use]
    pub const fn next_count(mut self, next_count: usize) -> Self {
        self.next_count = Some(next_count);
        self
    }

    /// Backward cursors to compute (defaults to `next_count`).
    #[must_use]
    pub const fn prev_count(mut self, prev_count: usize) -> Self {
        self.prev_count = Some(prev_count);
        self
    }

    /// Page full documents instead of aggregated values (default false).
    #[must_use]
    pub const fn use_docs(mut self, use_docs: bool) -> Self {
        self.use_docs = use_docs;
        self
    }

    /// Aggregate values per key on every scan (defaults to `!use_docs`).
    #[must_use]
    pub const fn grouped(mut self, grouped: bool) -> Self {
        self.grouped = Some(grouped);
        self
    }

    /// Treat an empty current page as a valid result (default false).
    #[must_use]
    pub const fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<PagerConfig, ConfigError> {
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::PageSizeZero);
        }

        let next_count = self.next_count.unwrap_or(1);
        let prev_count = self.prev_count.unwrap_or(next_count);
        let grouped = self.grouped.unwrap_or(!self.use_docs);

        if self.use_docs && grouped {
            return Err(ConfigError::GroupedDocuments);
        }

        // Every scan limit the planners derive must fit in usize.
        let forward = page_size
            .checked_mul(next_count)
            .and_then(|n| n.checked_add(1));
        let lookahead = page_size
            .checked_mul(next_count.saturating_sub(1))
            .and_then(|n| n.checked_add(2));
        let backward = prev_count
            .checked_mul(page_size)
            .and_then(|n| n.checked_add(2));
        if forward.is_none() || lookahead.is_none() || backward.is_none() {
            return Err(ConfigError::LookaheadOverflow {
                page_size,
                next_count,
                prev_count,
            });
        }

        Ok(PagerConfig {
            page_size,
            next_count,
            prev_count,
            use_docs: self.use_docs,
            grouped,
            allow_empty: self.allow_empty,
        })
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `page_size` must be strictly positive.
    PageSizeZero,
    /// A scan limit derived from `page_size`, `next_count` and `prev_count`
    /// would overflow.
    LookaheadOverflow {
        /// Configured page size.
        page_size: usize,
        /// Configured forward cursor count.
        next_count: usize,
        /// Configured backward cursor count.
        prev_count: usize,
    },
    /// Full documents cannot ride a per-key aggregated scan.
    GroupedDocuments,
    /// An export key is empty.
    ExportKeyEmpty(&'static str),
    /// Two export slots share the same key.
    ExportKeyClash(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSizeZero => write!(f, "page_size must be a strictly positive integer"),
            Self::LookaheadOverflow {
                page_size,
                next_count,
                prev_count,
            } => write!(
                f,
                "scan limits overflow for page_size={page_size}, \
                 next_count={next_count}, prev_count={prev_count}"
            ),
            Self::GroupedDocuments => {
                write!(f, "use_docs and grouped are mutually exclusive")
            },
            Self::ExportKeyEmpty(slot) => write!(f, "export key for the {slot} slot is empty"),
            Self::ExportKeyClash(key) => {
                write!(f, "export key {key:?} is used by more than one slot")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
