//! One-shot filtered page listing.

use anyhow::Context;
use domlens_common::config::Config;
use domlens_core::session::Session;
use domlens_remote::expansion::HttpExpander;
use tracing::info;

use crate::commands::{FilterArgs, SourceArgs, fetch};
use crate::dprint;
use crate::terminal::{format, print};

pub async fn list(
    source_args: SourceArgs,
    filters: FilterArgs,
    page: usize,
    cfg: &Config,
) -> anyhow::Result<()> {
    let origin = fetch::resolve(&source_args)?;
    let corpus = fetch::load(&origin)
        .await
        .with_context(|| format!("could not load {}; --file takes a local list", origin.describe()))?;

    info!("{} domains loaded from {}", corpus.len(), origin.describe());

    let expander = HttpExpander::from_env();
    let mut session = Session::new(corpus, cfg.per_page);
    session.set_filters(filters.into_config(&expander).await);
    session.goto_page(page);

    if cfg.quiet < 2 {
        dprint!();
    }

    let items = session.page_items();
    if items.is_empty() {
        print::no_results();
    } else {
        for (idx, domain) in items.iter().enumerate() {
            let picked = session.selection().contains(domain);
            print::print(&format::page_row(idx + 1, domain, picked));
        }
    }

    print::print(&format::page_banner(&session));
    if cfg.quiet == 0 {
        print::status(format::filter_summary(&session));
    }

    Ok(())
}
