// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
// Pedantic lints that are too verbose to fix individually
#![allow(clippy::doc_markdown)] // Code items in docs - extensive doc changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
// Internal planner code where bounds are checked before use
#![allow(clippy::indexing_slicing)] // Bounds checked before indexing in planner logic
// Stores and callers construct these types directly
#![allow(clippy::exhaustive_structs)] // Scan/ViewRow/Bounds are built by collaborators
#![allow(clippy::exhaustive_enums)] // PageCursor/Delivery are closed by design

//! # skipstone - bidirectional cursor pagination over ordered views
//!
//! Given a start cursor and key bounds, skipstone computes the current page,
//! the start keys of the next pages, and the start keys of the previous
//! pages - using nothing but one to three range scans against an ordered
//! key/value view you own. Bring any store that can answer a range scan; the
//! library never touches the data itself.
//!
//! # Pagination shape
//!
//! | Direction | Scans | Cost |
//! |-----------|-------|------|
//! | Current page + lookahead (values) | 1 combined | `page_size * next_count + 1` rows |
//! | Current page + lookahead (documents) | 1 + 1 cursor-only | full docs only for the page itself |
//! | History | 1 descending | `prev_count * page_size + 2` rows |
//!
//! Backward cursors use an explicit [`PageCursor::SequenceStart`] sentinel
//! for "this is the first page"; everything else is a real start key.
//!
//! # Quick start
//!
//! ```
//! use skipstone::{MemView, PageCursor, PagerConfig, Paginator, ViewRow};
//!
//! // An ordered view: keys 1..=5 with one value each.
//! let view: MemView<i64, i64, ()> =
//!     MemView::from_rows((1..=5).map(|k| ViewRow::new(k, k * 10)).collect());
//!
//! let config = PagerConfig::builder().page_size(3).build().unwrap();
//! let pager = Paginator::new(config);
//!
//! // First page: three values, one forward cursor, no history.
//! let page = pager.page(&view, None).unwrap();
//! assert_eq!(page.entries().len(), 3);
//! assert_eq!(page.next(), &[PageCursor::Key(4)]);
//! assert!(page.previous().is_empty());
//!
//! // Follow the forward cursor.
//! let start = page.next()[0].clone().into_start_key();
//! let page = pager.page(&view, start).unwrap();
//! assert_eq!(page.entries()[0].key, 4);
//! ```
//!
//! # Delivery
//!
//! An assembled [`PageSet`] leaves the library through an [`Emitter`]: a
//! JSON body, a named template, or slot-by-slot attachment onto the caller's
//! own context - exactly one path, chosen once at construction. See
//! [`Delivery`] and [`Responder`].
//!
//! # Errors
//!
//! Configuration is validated eagerly and fails closed ([`ConfigError`]).
//! Per-call failures ([`PageError`]) surface to the caller unretried: bounds
//! resolution failures before any scan, store failures verbatim, and an
//! empty current page - an error by default, a valid empty result when
//! `allow_empty` is configured.

mod bounds;
mod config;
mod cursor;
mod emit;
mod error;
mod mem;
mod page;
mod paginator;
mod plan;
mod store;

pub use bounds::{Bounds, KeyBounds};
pub use config::{ConfigError, PagerConfig, PagerConfigBuilder, DEFAULT_PAGE_SIZE};
pub use cursor::PageCursor;
pub use emit::{Delivery, Emitter, ExportKeys, Responder};
pub use error::{BoundsError, PageError};
pub use mem::MemView;
pub use page::PageSet;
pub use paginator::Paginator;
pub use store::{RangeView, Scan, ViewRow};
