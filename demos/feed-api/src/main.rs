#![allow(missing_docs)] // Demo crate - documentation not required
#![allow(clippy::exhaustive_structs)] // Demo types are internal, not published APIs

//! Feed API demo - pages a timestamp-keyed feed with skipstone.
//!
//! An in-memory view plays the ordered store; the paginator computes the
//! requested page plus its forward and backward cursors, and the result is
//! dispatched through the chosen delivery path to stdout.
//!
//! ```text
//! feed-api --start 1700000400 --page-size 5 --docs
//! feed-api --delivery attach
//! ```

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use skipstone::{
    Delivery, Emitter, MemView, PagerConfig, Paginator, Responder, ViewRow,
};

#[derive(Debug, Parser)]
#[command(about = "Page a demo feed with bidirectional cursors")]
struct Args {
    /// Start key (a timestamp); omit for the first page.
    #[arg(long)]
    start: Option<i64>,

    /// Entries per page.
    #[arg(long, default_value_t = 5)]
    page_size: usize,

    /// Forward cursors to compute.
    #[arg(long, default_value_t = 2)]
    next: usize,

    /// Backward cursors to compute.
    #[arg(long, default_value_t = 2)]
    prev: usize,

    /// Page full posts instead of per-key counts.
    #[arg(long)]
    docs: bool,

    /// How to hand the result over.
    #[arg(long, value_enum, default_value = "json")]
    delivery: DeliveryArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeliveryArg {
    /// Print the whole mapping as one JSON body.
    Json,
    /// Pretend-render a template with the mapping as context.
    Render,
    /// Attach each slot separately, middleware style.
    Attach,
}

#[derive(Debug, Clone, Serialize)]
struct Post {
    title: String,
    published_at: i64,
}

/// Ten posts, one minute apart, with a duplicate-keyed burst so grouped
/// counting has something to aggregate.
fn feed() -> MemView<i64, i64, Post> {
    let mut rows = Vec::new();
    for n in 0..10i64 {
        let published_at = 1_700_000_000 + n * 60;
        rows.push(
            ViewRow::new(published_at, 1).with_doc(Post {
                title: format!("Post #{n}"),
                published_at,
            }),
        );
        if n % 3 == 0 {
            rows.push(
                ViewRow::new(published_at, 1).with_doc(Post {
                    title: format!("Post #{n} (update)"),
                    published_at,
                }),
            );
        }
    }
    MemView::from_rows(rows).with_reduce(|counts| counts.iter().sum())
}

/// Writes each dispatch to stdout.
#[derive(Debug, Default)]
struct StdoutResponder;

impl Responder for StdoutResponder {
    fn json(&mut self, body: serde_json::Value) {
        println!("{body:#}");
    }

    fn render(&mut self, template: &str, body: serde_json::Value) {
        println!("render {template:?}: {body:#}");
    }

    fn attach(&mut self, slot: &str, value: serde_json::Value) {
        println!("{slot} = {value}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = PagerConfig::builder()
        .page_size(args.page_size)
        .next_count(args.next)
        .prev_count(args.prev)
        .use_docs(args.docs)
        .build()
        .context("invalid pagination options")?;
    let use_docs = config.use_docs();
    let pager = Paginator::new(config);

    let view = feed();
    let page = pager
        .page(&view, args.start)
        .context("paging the feed failed")?;
    tracing::info!(
        entries = page.entries().len(),
        next = page.next().len(),
        previous = page.previous().len(),
        "page computed"
    );

    let delivery = match args.delivery {
        DeliveryArg::Json => Delivery::Json,
        DeliveryArg::Render => Delivery::Render("feed/page".to_string()),
        DeliveryArg::Attach => Delivery::Attach,
    };
    Emitter::new(delivery)
        .deliver(&page, use_docs, &mut StdoutResponder)
        .context("emitting the page failed")?;
    Ok(())
}
