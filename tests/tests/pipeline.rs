//! End-to-end properties of the filter → stats → paginate pipeline.

use domlens_common::model::filter::{DigitPolicy, ExtensionClass, FilterConfig};
use domlens_common::model::page::PageState;
use domlens_core::{filter, paginate, stats};
use domlens_integration_tests::corpus;

fn mixed_corpus() -> Vec<String> {
    corpus(&[
        "abc.com.br",
        "ab12.com.br",
        "xyz.net",
        "loja.com.br",
        "minhaloja.com.br",
        "bigshop.net",
        "outro.com.br",
        "verylongname99.com.br",
        "a.com.br",
    ])
}

#[test]
fn filtering_preserves_corpus_order() {
    let corpus = mixed_corpus();
    let cfg = FilterConfig {
        extension: ExtensionClass::ComBr,
        ..Default::default()
    };

    let filtered = filter::apply(&corpus, &cfg);

    // the output must be a subsequence of the corpus in original order
    let mut cursor = corpus.iter();
    for kept in &filtered {
        assert!(
            cursor.any(|original| original.as_str() == *kept),
            "{kept} out of order or not from the corpus"
        );
    }
}

#[test]
fn stats_counts_always_add_up() {
    let corpus = mixed_corpus();
    let configs = [
        FilterConfig::default(),
        FilterConfig {
            digits: DigitPolicy::Required,
            ..Default::default()
        },
        FilterConfig {
            extension: ExtensionClass::Other,
            free_text: "shop".to_string(),
            ..Default::default()
        },
    ];

    for cfg in configs {
        let filtered = filter::apply(&corpus, &cfg);
        let derived = stats::aggregate(&filtered);

        assert_eq!(derived.total, filtered.len());
        let by_length: usize = derived.by_length.iter().map(|&(_, n)| n).sum();
        let by_letter: usize = derived.by_letter.iter().map(|&(_, n)| n).sum();
        assert_eq!(by_length, derived.total);
        assert_eq!(by_letter, derived.total);
    }
}

#[test]
fn length_groups_sort_numerically_with_two_digit_lengths() {
    let corpus = corpus(&[
        "ab.com.br",
        "ninechars.com.br",
        "tenchars10.com.br",
        "elevenchars.com.br",
    ]);
    let filtered = filter::apply(&corpus, &FilterConfig::default());
    let derived = stats::aggregate(&filtered);

    let lengths: Vec<usize> = derived.by_length.iter().map(|&(len, _)| len).collect();
    assert_eq!(lengths, vec![2, 9, 10, 11], "10 must sort after 9, not after 1");
}

#[test]
fn letter_groups_sort_lexicographically() {
    let corpus = corpus(&["zeta.net", "alpha.net", "mid.net", "2fast.net"]);
    let filtered = filter::apply(&corpus, &FilterConfig::default());
    let derived = stats::aggregate(&filtered);

    let letters: Vec<char> = derived.by_letter.iter().map(|&(c, _)| c).collect();
    assert_eq!(letters, vec!['2', 'A', 'M', 'Z']);
}

#[test]
fn pages_tile_the_filtered_set_without_gaps_or_overlap() {
    let corpus: Vec<String> = (0..53).map(|i| format!("domain{i:02}.com.br")).collect();
    let filtered = filter::apply(&corpus, &FilterConfig::default());
    let per_page: usize = 7;

    let total = paginate::total_pages(filtered.len(), per_page);
    let mut rebuilt: Vec<&str> = Vec::new();
    for current in 1..=total {
        let page = PageState { current, per_page };
        rebuilt.extend_from_slice(paginate::slice(&filtered, &page));
    }

    assert_eq!(rebuilt, filtered);
}

#[test]
fn narrowing_scenario_matches_step_by_step() {
    let corpus = corpus(&["abc.com.br", "ab12.com.br", "xyz.net"]);

    let mut cfg = FilterConfig {
        min_length: 3,
        max_length: 10,
        ..Default::default()
    };
    assert_eq!(filter::apply(&corpus, &cfg).len(), 3, "length excludes none");

    cfg.extension = ExtensionClass::ComBr;
    assert_eq!(
        filter::apply(&corpus, &cfg),
        vec!["abc.com.br", "ab12.com.br"]
    );

    cfg.digits = DigitPolicy::Required;
    assert_eq!(filter::apply(&corpus, &cfg), vec!["ab12.com.br"]);
}

#[test]
fn keyword_scenario_is_an_or_and_shadows_free_text() {
    let corpus = corpus(&["minhaloja.com.br", "bigshop.net", "outro.com.br"]);
    let cfg = FilterConfig {
        free_text: "outro".to_string(),
        keywords: vec!["loja".to_string(), "shop".to_string()],
        ..Default::default()
    };

    assert_eq!(
        filter::apply(&corpus, &cfg),
        vec!["minhaloja.com.br", "bigshop.net"]
    );
}

#[test]
fn degenerate_inputs_resolve_to_empty_never_panic() {
    let corpus = mixed_corpus();

    // inverted bounds
    let inverted = FilterConfig {
        min_length: 50,
        max_length: 2,
        ..Default::default()
    };
    assert!(filter::apply(&corpus, &inverted).is_empty());

    // out-of-range page over an empty filtered set
    let filtered = filter::apply(&corpus, &inverted);
    let page = PageState {
        current: 9_999,
        per_page: 10,
    };
    assert!(paginate::slice(&filtered, &page).is_empty());
    assert_eq!(paginate::total_pages(filtered.len(), 10), 1);

    // stats over nothing
    let derived = stats::aggregate(&filtered);
    assert_eq!(derived.total, 0);
}
