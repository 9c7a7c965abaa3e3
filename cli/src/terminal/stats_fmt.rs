use crate::terminal::colors;
use colored::*;
use domlens_common::model::stats::DerivedStats;

const BAR_WIDTH: usize = 28;

/// Rows for the by-name-length distribution, longest bar scaled to
/// [`BAR_WIDTH`].
pub fn length_rows(stats: &DerivedStats) -> Vec<String> {
    let max: usize = peak(stats.by_length.iter().map(|&(_, n)| n));
    stats
        .by_length
        .iter()
        .map(|&(len, count)| row(&format!("{len:>3}"), count, max))
        .collect()
}

/// Rows for the by-first-character distribution.
pub fn letter_rows(stats: &DerivedStats) -> Vec<String> {
    let max: usize = peak(stats.by_letter.iter().map(|&(_, n)| n));
    stats
        .by_letter
        .iter()
        .map(|&(letter, count)| row(&format!("{letter:>3}"), count, max))
        .collect()
}

fn peak(counts: impl Iterator<Item = usize>) -> usize {
    counts.max().unwrap_or(0).max(1)
}

fn row(key: &str, count: usize, max: usize) -> String {
    let filled: usize = (count * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH);
    let bar: ColoredString = "█".repeat(filled).color(colors::PRIMARY);
    let rest: ColoredString = "░".repeat(BAR_WIDTH - filled).color(colors::SEPARATOR);
    let count: ColoredString = count.to_string().color(colors::COUNT);

    format!(" {} {}{} {}", key.color(colors::ACCENT), bar, rest, count)
}
