//! The interactive explorer loop.
//!
//! One session, one command prompt: narrow the list with filter
//! commands, page through it, hand-pick domains, and write the picks
//! out when done. Every mutation goes through the session so the reset
//! and staleness rules hold no matter how commands are interleaved.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::*;
use domlens_common::config::Config;
use domlens_common::model::filter::FilterConfig;
use domlens_core::session::Session;
use domlens_core::source::{self, SemanticExpander};
use domlens_remote::expansion::HttpExpander;
use domlens_remote::file::FileCorpusSource;
use tracing::{Instrument, info, info_span, warn};

use crate::commands::{FilterArgs, SourceArgs, fetch};
use crate::dprint;
use crate::terminal::{format, print, stats_fmt};

const DEFAULT_EXPORT_FILE: &str = "selected-domains.txt";

pub async fn browse(
    source_args: SourceArgs,
    filters: FilterArgs,
    cfg: &Config,
) -> anyhow::Result<()> {
    let corpus = obtain_corpus(&source_args).await?;
    info!("{} domains loaded", corpus.len());

    let expander = HttpExpander::from_env();
    if !expander.is_configured() {
        print::status("no DOMLENS_AI_KEY set, 'ai' queries match literally");
    }

    let mut session = Session::new(corpus, cfg.per_page);
    session.set_filters(filters.into_config(&expander).await);

    render_page(&session, cfg);
    print::status("type 'help' for the command list, 'quit' to leave");

    loop {
        prompt();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        if !run_command(line.trim(), &mut session, &expander, cfg).await? {
            break;
        }
    }

    print::end_of_program();
    Ok(())
}

/// Fetches the corpus, degrading to a local-file prompt when the remote
/// source is unreachable. Never fatal on fetch failure alone.
async fn obtain_corpus(args: &SourceArgs) -> anyhow::Result<Vec<String>> {
    let origin = fetch::resolve(args)?;
    match fetch::load(&origin).await {
        Ok(corpus) => Ok(corpus),
        Err(e) => {
            warn!("{} unreachable: {e}", origin.describe());
            print::status("the remote list could not be fetched; a local file works as fallback");
            prompt_local_file().await
        }
    }
}

async fn prompt_local_file() -> anyhow::Result<Vec<String>> {
    loop {
        eprint!("path to a local domain list (blank to abort): ");
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            anyhow::bail!("no corpus available");
        }
        let path = line.trim();
        if path.is_empty() {
            anyhow::bail!("no corpus available");
        }

        match source::load_corpus(&FileCorpusSource::new(path)).await {
            Ok(corpus) => return Ok(corpus),
            Err(e) => warn!("{e}"),
        }
    }
}

/// Dispatches one prompt line. Returns `false` when the user leaves.
async fn run_command<E: SemanticExpander>(
    line: &str,
    session: &mut Session,
    expander: &E,
    cfg: &Config,
) -> anyhow::Result<bool> {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => {}
        "quit" | "exit" | "q" => return Ok(false),
        "help" | "h" => help(),
        "show" | "ls" => render_page(session, cfg),
        "stats" => render_stats(session, cfg),

        "next" | "n" => {
            session.next_page();
            render_page(session, cfg);
        }
        "prev" | "p" => {
            session.prev_page();
            render_page(session, cfg);
        }
        "page" => match rest.parse::<usize>() {
            Ok(target) => {
                session.goto_page(target);
                render_page(session, cfg);
            }
            Err(_) => print::status("usage: page <number>"),
        },
        "per" => match rest.parse::<usize>() {
            Ok(size) if size > 0 => {
                session.set_per_page(size);
                render_page(session, cfg);
            }
            _ => print::status("usage: per <number greater than zero>"),
        },

        "min" => set_bound(session, rest, cfg, |config, len| config.min_length = len),
        "max" => set_bound(session, rest, cfg, |config, len| config.max_length = len),
        "ext" => set_extension(session, rest, cfg),
        "digits" => set_digits(session, rest, cfg),
        "prefix" => {
            session.update_filters(|config| config.prefix = rest.to_lowercase());
            render_page(session, cfg);
        }
        "first" => {
            if rest.chars().count() > 1 {
                print::status("usage: first <one character, or nothing to unset>");
            } else {
                session.update_filters(|config| config.first_letter = rest.to_lowercase());
                render_page(session, cfg);
            }
        }
        "find" => {
            session.update_filters(|config| {
                config.free_text = rest.to_lowercase();
                config.keywords.clear();
            });
            render_page(session, cfg);
        }
        "ai" => expand_and_apply(rest, session, expander, cfg).await,

        "load" => load_replacement(rest, session, cfg).await,

        "pick" => pick(rest, session),
        "picks" => list_picks(session),
        "clear" => clear_picks(session)?,
        "save" => save(rest, session),

        "reset" => {
            session.set_filters(FilterConfig::default());
            render_page(session, cfg);
        }

        unknown => print::status(format!("unknown command '{unknown}', try 'help'")),
    }

    Ok(true)
}

fn set_bound(
    session: &mut Session,
    rest: &str,
    cfg: &Config,
    assign: impl FnOnce(&mut FilterConfig, usize),
) {
    match rest.parse::<usize>() {
        Ok(len) => {
            session.update_filters(|config| assign(config, len));
            render_page(session, cfg);
        }
        Err(_) => print::status("expected a number"),
    }
}

fn set_extension(session: &mut Session, rest: &str, cfg: &Config) {
    use domlens_common::model::filter::ExtensionClass;

    let class = match rest {
        "any" => ExtensionClass::Any,
        ".com.br" | "com.br" | "combr" => ExtensionClass::ComBr,
        "other" | "others" => ExtensionClass::Other,
        _ => {
            print::status("usage: ext any | com.br | other");
            return;
        }
    };
    session.update_filters(|config| config.extension = class);
    render_page(session, cfg);
}

fn set_digits(session: &mut Session, rest: &str, cfg: &Config) {
    use domlens_common::model::filter::DigitPolicy;

    let policy = match rest {
        "any" => DigitPolicy::Any,
        "yes" | "with" => DigitPolicy::Required,
        "no" | "without" => DigitPolicy::Rejected,
        _ => {
            print::status("usage: digits any | yes | no");
            return;
        }
    };
    session.update_filters(|config| config.digits = policy);
    render_page(session, cfg);
}

/// Runs one semantic expansion under a fresh token so a slow reply can
/// never overwrite the keywords of a newer query.
async fn expand_and_apply<E: SemanticExpander>(
    query: &str,
    session: &mut Session,
    expander: &E,
    cfg: &Config,
) {
    if query.is_empty() {
        session.clear_keywords();
        render_page(session, cfg);
        return;
    }

    let token = session.begin_expansion();
    let span = info_span!("expanding concept", indicatif.pb_show = true);
    let keywords = expander.expand(query).instrument(span).await;

    if session.apply_expansion(token, keywords) {
        info!("matching any of: {}", session.filters().keywords.join(", "));
        render_page(session, cfg);
    }
}

/// Swaps the whole corpus for a locally supplied list. Picks survive;
/// paging starts over.
async fn load_replacement(arg: &str, session: &mut Session, cfg: &Config) {
    if arg.is_empty() {
        print::status("usage: load <path to a local domain list>");
        return;
    }

    match source::load_corpus(&FileCorpusSource::new(arg)).await {
        Ok(corpus) => {
            info!("{} domains loaded", corpus.len());
            session.replace_corpus(corpus);
            render_page(session, cfg);
        }
        Err(e) => warn!("{e}"),
    }
}

fn pick(arg: &str, session: &mut Session) {
    if arg.is_empty() {
        print::status("usage: pick <position on this page, or a domain>");
        return;
    }

    let resolved: Option<String> = if let Ok(position) = arg.parse::<usize>() {
        position
            .checked_sub(1)
            .and_then(|idx| session.page_items().get(idx).map(|d| d.to_string()))
    } else {
        Some(arg.to_lowercase())
    };

    let Some(domain) = resolved else {
        print::status("no such position on this page");
        return;
    };

    if session.toggle_pick(&domain) {
        print::status(format!("picked {}", domain.color(crate::terminal::colors::DOMAIN)));
    } else {
        print::status(format!("unpicked {domain}"));
    }
}

fn list_picks(session: &Session) {
    if session.selection().is_empty() {
        print::status("nothing picked yet");
        return;
    }

    let mut picks: Vec<&str> = session.selection().iter().collect();
    picks.sort_unstable();
    for domain in picks {
        print::print(&format!("  {} {}", "●".bright_green(), domain));
    }
    print::status(format!("{} picked", session.selection().len()));
}

/// Clearing is destructive; one accidental keystroke must not do it.
fn clear_picks(session: &mut Session) -> anyhow::Result<()> {
    if session.selection().is_empty() {
        print::status("nothing picked");
        return Ok(());
    }

    eprint!("drop all {} picked domains? [y/N] ", session.selection().len());
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        session.clear_picks();
        info!("selection cleared");
    } else {
        print::status("kept as-is");
    }
    Ok(())
}

fn save(arg: &str, session: &Session) {
    if session.selection().is_empty() {
        print::status("nothing picked yet");
        return;
    }

    let path: PathBuf = if arg.is_empty() {
        PathBuf::from(DEFAULT_EXPORT_FILE)
    } else {
        PathBuf::from(arg)
    };

    let mut text = session.selection().export();
    text.push('\n');

    match std::fs::write(&path, text) {
        Ok(()) => info!(
            "{} domains written to {}",
            session.selection().len(),
            path.display()
        ),
        Err(e) => warn!("could not write {}: {e}", path.display()),
    }
}

fn render_page(session: &Session, cfg: &Config) {
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

    print::print(&format::page_banner(session));
    if cfg.quiet == 0 {
        print::status(format::filter_summary(session));
    }
}

fn render_stats(session: &Session, cfg: &Config) {
    let stats = session.stats();

    print::header("statistics", cfg.quiet);
    print::print(&format!(
        "{} domains match the current filter",
        stats.total.to_string().bold().bright_magenta()
    ));

    if stats.total == 0 {
        return;
    }

    dprint!();
    print::print(&format!("{}", "by name length".bold()));
    for row in stats_fmt::length_rows(&stats) {
        print::print(&row);
    }

    dprint!();
    print::print(&format!("{}", "by first character".bold()));
    for row in stats_fmt::letter_rows(&stats) {
        print::print(&row);
    }
}

fn prompt() {
    eprint!("{} ", "domlens>".bright_green().bold());
    let _ = io::stderr().flush();
}

fn help() {
    let lines = [
        ("show, stats", "current page / aggregate statistics"),
        ("next, prev, page N, per N", "navigate and size pages"),
        ("min N, max N", "name length bounds (extension excluded)"),
        ("ext any|com.br|other", "extension class"),
        ("digits any|yes|no", "digit policy"),
        ("prefix P, first C", "start-with constraints"),
        ("find TEXT", "literal substring match"),
        ("ai CONCEPT", "expand a concept into keywords (ai alone unsets)"),
        ("load PATH", "replace the whole list from a local file"),
        ("pick N|DOMAIN, picks", "toggle and review picks"),
        ("clear, save [PATH]", "drop picks / export them as text"),
        ("reset", "back to an unconstrained filter"),
        ("quit", "leave"),
    ];

    for (cmd, explanation) in lines {
        // pad before coloring so the escape codes don't skew alignment
        print::print(&format!(
            "  {} {}",
            format!("{cmd:<28}").bright_green(),
            explanation.bright_black()
        ));
    }
}
