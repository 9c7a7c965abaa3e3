//! # Filter Engine
//!
//! Applies one [`FilterConfig`] snapshot to the corpus.
//!
//! The chain is purely conjunctive and evaluated in a fixed order:
//! length bounds, extension class, digit policy, prefix, first letter,
//! text criterion. Domains arrive already normalized (lower-cased,
//! trimmed, non-empty), so no predicate re-normalizes.

use domlens_common::domain::{COM_BR_SUFFIX, name_len};
use domlens_common::model::filter::{DigitPolicy, ExtensionClass, FilterConfig, TextCriterion};

/// Filters the corpus down to the domains matching `cfg`.
///
/// Stable: the output is a subsequence of `corpus` in its original
/// order. Degenerate configurations (inverted length bounds, conflicting
/// start-with constraints) yield an empty result, never an error.
pub fn apply<'a>(corpus: &'a [String], cfg: &FilterConfig) -> Vec<&'a str> {
    corpus
        .iter()
        .map(String::as_str)
        .filter(|domain| matches(domain, cfg))
        .collect()
}

/// Evaluates the full predicate chain against one domain.
pub fn matches(domain: &str, cfg: &FilterConfig) -> bool {
    in_length_bounds(domain, cfg.min_length, cfg.max_length)
        && in_extension_class(domain, cfg.extension)
        && satisfies_digit_policy(domain, cfg.digits)
        && has_prefix(domain, &cfg.prefix)
        && has_prefix(domain, &cfg.first_letter)
        && matches_text(domain, cfg)
}

/// Bounds apply to the name part only, `abc` in `abc.com.br`.
fn in_length_bounds(domain: &str, min: usize, max: usize) -> bool {
    let len: usize = name_len(domain);
    len >= min && len <= max
}

fn in_extension_class(domain: &str, class: ExtensionClass) -> bool {
    match class {
        ExtensionClass::Any => true,
        ExtensionClass::ComBr => domain.ends_with(COM_BR_SUFFIX),
        ExtensionClass::Other => !domain.ends_with(COM_BR_SUFFIX),
    }
}

fn satisfies_digit_policy(domain: &str, policy: DigitPolicy) -> bool {
    match policy {
        DigitPolicy::Any => true,
        DigitPolicy::Required => domain.chars().any(|c| c.is_ascii_digit()),
        DigitPolicy::Rejected => !domain.chars().any(|c| c.is_ascii_digit()),
    }
}

/// An empty constraint matches everything; `str::starts_with` already
/// behaves that way, kept explicit for the skip semantics.
fn has_prefix(domain: &str, constraint: &str) -> bool {
    constraint.is_empty() || domain.starts_with(constraint)
}

fn matches_text(domain: &str, cfg: &FilterConfig) -> bool {
    match cfg.text_criterion() {
        TextCriterion::Keywords(keywords) => keywords.iter().any(|kw| domain.contains(kw.as_str())),
        TextCriterion::Literal(text) => domain.contains(text),
        TextCriterion::None => true,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
