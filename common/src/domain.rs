//! # Domain Normalization
//!
//! Ingestion rules for turning raw source lines into domain values.
//!
//! Every domain held by the engine went through [`normalize`]: trimmed,
//! lower-cased, never empty. Downstream code (filtering, statistics,
//! selection) relies on this and does not re-normalize.

/// Longest full domain name we accept, per RFC 1035.
pub const MAX_DOMAIN_LEN: usize = 253;

/// The suffix that splits the corpus into its two extension classes.
pub const COM_BR_SUFFIX: &str = ".com.br";

/// Normalizes one raw source line into a domain value.
///
/// Returns `None` for lines that are empty after trimming; those never
/// enter the corpus.
pub fn normalize(raw: &str) -> Option<String> {
    let domain = raw.trim().to_lowercase();
    if domain.is_empty() {
        return None;
    }
    Some(domain)
}

/// Normalizes a whole batch of raw lines, dropping the unusable ones.
///
/// Order is preserved; duplicates are kept (the corpus is a sequence,
/// not a set).
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| normalize(line.as_ref()))
        .collect()
}

/// Length of the name part of a domain, everything before the first dot.
///
/// This is the length users reason about when hunting short domains:
/// `abc.com.br` has a name length of 3, not 10. Length filtering and the
/// by-length statistics both use this measure.
pub fn name_len(domain: &str) -> usize {
    domain.split('.').next().unwrap_or(domain).len()
}

/// Reduces a free-text query to the literal form used for matching.
///
/// Keeps ASCII letters and digits only, lower-cased. This is the fallback
/// keyword when semantic expansion is unavailable, so it must always be
/// derivable locally.
pub fn sanitize_query(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
