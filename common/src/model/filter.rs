//! # Filter Configuration Model
//!
//! The value object describing one immutable filtering snapshot.
//!
//! The engine compares snapshots by equality to detect configuration
//! changes, so every field keeps plain value semantics. The struct says
//! *what* to keep; the predicate chain in `domlens-core` decides *how*.

use crate::domain::MAX_DOMAIN_LEN;

/// Which extension group a domain must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionClass {
    /// No constraint.
    #[default]
    Any,
    /// Only `.com.br` domains.
    ComBr,
    /// Everything that is not `.com.br`. No other suffix is special-cased.
    Other,
}

/// Whether a domain may, must, or must not carry an ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitPolicy {
    /// No constraint.
    #[default]
    Any,
    /// At least one digit anywhere in the name.
    Required,
    /// No digit anywhere in the name.
    Rejected,
}

/// One filtering snapshot.
///
/// `prefix` and `first_letter` are both start-with constraints sourced
/// from distinct controls and applied independently; conflicting values
/// legitimately produce an empty result.
///
/// `keywords` non-empty replaces `free_text` as the text criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Inclusive lower bound on domain length.
    pub min_length: usize,
    /// Inclusive upper bound on domain length.
    ///
    /// A bound below `min_length` is not an error; the filter simply
    /// matches nothing.
    pub max_length: usize,
    pub extension: ExtensionClass,
    pub digits: DigitPolicy,
    /// Literal start-with constraint; empty means unconstrained.
    pub prefix: String,
    /// Single-character start-with constraint; empty means unconstrained.
    pub first_letter: String,
    /// Literal substring match, used only while `keywords` is empty.
    pub free_text: String,
    /// Expanded keywords; a domain matches if it contains any one of them.
    pub keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: MAX_DOMAIN_LEN,
            extension: ExtensionClass::Any,
            digits: DigitPolicy::Any,
            prefix: String::new(),
            first_letter: String::new(),
            free_text: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// The active text-match criterion of a [`FilterConfig`].
#[derive(Debug, PartialEq, Eq)]
pub enum TextCriterion<'a> {
    /// Match domains containing at least one of these keywords.
    Keywords(&'a [String]),
    /// Match domains containing this literal.
    Literal(&'a str),
    /// No text constraint.
    None,
}

impl FilterConfig {
    /// Resolves the keyword-vs-free-text priority rule.
    pub fn text_criterion(&self) -> TextCriterion<'_> {
        if !self.keywords.is_empty() {
            return TextCriterion::Keywords(&self.keywords);
        }
        if !self.free_text.is_empty() {
            return TextCriterion::Literal(&self.free_text);
        }
        TextCriterion::None
    }

    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
