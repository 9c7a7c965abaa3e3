//! # Statistics Aggregator
//!
//! Builds [`DerivedStats`] from one filtered set: total count plus
//! frequency groupings by name length and by leading character. One
//! counting pass, then two sort passes for presentation order.

use std::collections::HashMap;

use domlens_common::domain::name_len;
use domlens_common::model::stats::DerivedStats;

/// Aggregates the filtered set. Pure; recomputed on every call.
pub fn aggregate(filtered: &[&str]) -> DerivedStats {
    let mut length_counts: HashMap<usize, usize> = HashMap::new();
    let mut letter_counts: HashMap<char, usize> = HashMap::new();

    for domain in filtered {
        // Ingestion guarantees non-empty strings; skip rather than fault
        // if that ever breaks.
        let Some(first) = domain.chars().next() else {
            continue;
        };

        *length_counts.entry(name_len(domain)).or_insert(0) += 1;
        *letter_counts.entry(first.to_ascii_uppercase()).or_insert(0) += 1;
    }

    let mut by_length: Vec<(usize, usize)> = length_counts.into_iter().collect();
    by_length.sort_unstable_by_key(|&(len, _)| len);

    let mut by_letter: Vec<(char, usize)> = letter_counts.into_iter().collect();
    by_letter.sort_unstable_by_key(|&(letter, _)| letter);

    DerivedStats {
        total: filtered.len(),
        by_length,
        by_letter,
    }
}
