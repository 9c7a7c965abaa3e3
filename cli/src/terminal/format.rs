use crate::terminal::colors;
use colored::*;
use domlens_common::domain::name_len;
use domlens_core::session::Session;

/// One listing row: position on the page, pick marker, the domain and
/// its name length.
pub fn page_row(position: usize, domain: &str, picked: bool) -> String {
    let idx: String = format!("[{}]", format!("{position:>3}").color(colors::ACCENT));
    let marker: ColoredString = if picked {
        "●".bright_green().bold()
    } else {
        "○".bright_black()
    };
    let name: ColoredString = domain.color(colors::DOMAIN);
    let len: ColoredString = format!("({})", name_len(domain)).color(colors::SEPARATOR);

    format!("{} {} {} {}", idx.color(colors::SEPARATOR), marker, name, len)
}

/// The one-line position summary under a listing.
pub fn page_banner(session: &Session) -> String {
    let matches: usize = session.match_count();
    let picked: usize = session.selection().len();

    let position: ColoredString = format!(
        "page {} of {}",
        session.page().current,
        session.total_pages()
    )
    .bold()
    .color(colors::PRIMARY);
    let matching: ColoredString = format!("{matches} matching").color(colors::COUNT);
    let picked: ColoredString = format!("{picked} picked").color(colors::ACCENT);

    format!("{position} {} {matching} {} {picked}", "·".bright_black(), "·".bright_black())
}

/// Compact rendering of the active filter snapshot for the prompt area.
pub fn filter_summary(session: &Session) -> String {
    use domlens_common::model::filter::{DigitPolicy, ExtensionClass, TextCriterion};

    let cfg = session.filters();
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!("len {}..={}", cfg.min_length, cfg.max_length));
    match cfg.extension {
        ExtensionClass::Any => {}
        ExtensionClass::ComBr => parts.push("ext .com.br".to_string()),
        ExtensionClass::Other => parts.push("ext other".to_string()),
    }
    match cfg.digits {
        DigitPolicy::Any => {}
        DigitPolicy::Required => parts.push("digits".to_string()),
        DigitPolicy::Rejected => parts.push("no digits".to_string()),
    }
    if !cfg.prefix.is_empty() {
        parts.push(format!("prefix '{}'", cfg.prefix));
    }
    if !cfg.first_letter.is_empty() {
        parts.push(format!("first '{}'", cfg.first_letter));
    }
    match cfg.text_criterion() {
        TextCriterion::Keywords(keywords) => parts.push(format!("any of {}", keywords.join("|"))),
        TextCriterion::Literal(text) => parts.push(format!("contains '{text}'")),
        TextCriterion::None => {}
    }

    parts.join(", ")
}
