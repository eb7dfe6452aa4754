//! Forward page planner: the current page plus up to `next_count` forward
//! cursors, in as few scans as possible.
//!
//! Two shapes, picked by configuration:
//!
//! - **value mode**: one scan covers the page and the lookahead, since
//!   aggregated values are cheap to transfer;
//! - **document mode**: the page scan carries full documents, so the
//!   lookahead runs as a second, cursor-only scan instead of dragging
//!   `next_count` pages worth of documents over the wire.

use crate::bounds::Bounds;
use crate::config::PagerConfig;
use crate::cursor::PageCursor;
use crate::error::PageError;
use crate::store::{RangeView, Scan, ViewRow};

type Planned<S> = (
    Vec<ViewRow<<S as RangeView>::Key, <S as RangeView>::Value, <S as RangeView>::Doc>>,
    Vec<PageCursor<<S as RangeView>::Key>>,
);

/// Compute the current page and its forward cursors.
///
/// Returns [`PageError::Empty`] when the start key matches no rows; the
/// caller decides whether that is fatal.
pub(crate) fn plan<S: RangeView>(
    view: &S,
    config: &PagerConfig,
    bounds: &Bounds<S::Key>,
) -> Result<Planned<S>, PageError<S::Error>> {
    if config.use_docs() {
        plan_documents(view, config, bounds)
    } else {
        plan_values(view, config, bounds)
    }
}

/// Value mode: one combined page-and-lookahead scan.
fn plan_values<S: RangeView>(
    view: &S,
    config: &PagerConfig,
    bounds: &Bounds<S::Key>,
) -> Result<Planned<S>, PageError<S::Error>> {
    let limit = config.forward_limit();
    let rows = view
        .scan(
            Scan::forward(bounds.start.clone(), bounds.uppermost.clone(), limit)
                .grouped(config.grouped()),
        )
        .map_err(PageError::Scan)?;
    tracing::debug!(rows = rows.len(), limit, "forward value scan");

    if rows.is_empty() {
        return Err(PageError::Empty);
    }

    let next = rows
        .iter()
        .skip(config.page_size())
        .step_by(config.page_size())
        .take(config.next_count())
        .map(|row| PageCursor::Key(row.key.clone()))
        .collect();

    let mut entries = rows;
    entries.truncate(config.page_size());
    Ok((entries, next))
}

/// Document mode: a document-carrying page scan, then a cursor-only
/// lookahead scan only when the page came back full.
fn plan_documents<S: RangeView>(
    view: &S,
    config: &PagerConfig,
    bounds: &Bounds<S::Key>,
) -> Result<Planned<S>, PageError<S::Error>> {
    let entries = view
        .scan(
            Scan::forward(
                bounds.start.clone(),
                bounds.uppermost.clone(),
                config.page_size(),
            )
            .include_docs(),
        )
        .map_err(PageError::Scan)?;
    tracing::debug!(rows = entries.len(), "forward document scan");

    if entries.is_empty() {
        return Err(PageError::Empty);
    }

    // A short page means the sequence is exhausted; nothing lies ahead.
    if entries.len() < config.page_size() || config.next_count() == 0 {
        return Ok((entries, Vec::new()));
    }

    // The lookahead starts at the page's last key, so its row 0 repeats that
    // boundary key and the first real cursor sits at index 1.
    let boundary = entries
        .last()
        .map(|row| row.key.clone());
    let limit = config.lookahead_limit();
    let rows = view
        .scan(Scan::forward(boundary, bounds.uppermost.clone(), limit))
        .map_err(PageError::Scan)?;
    tracing::debug!(rows = rows.len(), limit, "forward lookahead scan");

    let next = rows
        .iter()
        .skip(1)
        .step_by(config.page_size())
        .take(config.next_count())
        .map(|row| PageCursor::Key(row.key.clone()))
        .collect();
    Ok((entries, next))
}
