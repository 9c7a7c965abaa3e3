use indicatif::ProgressStyle;

/// Style applied to every span-driven progress bar.
///
/// Spans opt in with the `indicatif.pb_show` field; the two slow spots
/// (corpus fetch, semantic expansion) are the only ones that do.
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{span_child_prefix}{spinner:.green} {span_name} {msg}")
        .expect("spinner template is static")
        .tick_strings(&[
            "▁▁▁▁▁",
            "▂▁▁▁▁",
            "▄▂▁▁▁",
            "▆▄▂▁▁",
            "█▆▄▂▁",
            "▆█▆▄▂",
            "▄▆█▆▄",
            "▂▄▆█▆",
            "▁▂▄▆█",
            "▁▁▂▄▆",
            "▁▁▁▂▄",
            "▁▁▁▁▂",
        ])
}
