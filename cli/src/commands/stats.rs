//! One-shot aggregate report over the filtered list.

use anyhow::Context;
use colored::*;
use domlens_common::config::Config;
use domlens_core::session::Session;
use domlens_remote::expansion::HttpExpander;
use tracing::info;

use crate::commands::{FilterArgs, SourceArgs, fetch};
use crate::dprint;
use crate::terminal::{format, print, stats_fmt};

pub async fn stats(
    source_args: SourceArgs,
    filters: FilterArgs,
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

    let derived = session.stats();

    if cfg.quiet < 2 {
        dprint!();
    }
    print::print(&format!(
        "{} of {} domains match",
        derived.total.to_string().bold().bright_magenta(),
        session.corpus().len()
    ));
    if cfg.quiet == 0 {
        print::status(format::filter_summary(&session));
    }

    if derived.total == 0 {
        return Ok(());
    }

    dprint!();
    print::print(&format!("{}", "by name length".bold()));
    for row in stats_fmt::length_rows(&derived) {
        print::print(&row);
    }

    dprint!();
    print::print(&format!("{}", "by first character".bold()));
    for row in stats_fmt::letter_rows(&derived) {
        print::print(&row);
    }

    print::fat_separator();
    Ok(())
}
