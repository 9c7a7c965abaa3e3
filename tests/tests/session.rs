//! Session-level behavior: reset rules, pick lifecycle, staleness.

use domlens_common::model::filter::ExtensionClass;
use domlens_core::session::Session;
use domlens_integration_tests::corpus;

fn big_session() -> Session {
    let corpus: Vec<String> = (0..120).map(|i| format!("name{i:03}.com.br")).collect();
    Session::new(corpus, 10)
}

#[test]
fn filter_change_resets_paging_from_deep_pages() {
    let mut session = big_session();
    session.goto_page(5);
    assert_eq!(session.page().current, 5);

    session.update_filters(|cfg| cfg.extension = ExtensionClass::ComBr);
    assert_eq!(session.page().current, 1);
}

#[test]
fn page_size_change_alone_keeps_position() {
    let mut session = big_session();
    session.goto_page(3);

    session.set_per_page(40);
    assert_eq!(session.page().current, 3);
}

#[test]
fn corpus_replacement_resets_paging() {
    let mut session = big_session();
    session.goto_page(8);

    session.replace_corpus(corpus(&["only.com.br"]));
    assert_eq!(session.page().current, 1);
    assert_eq!(session.match_count(), 1);
}

#[test]
fn picks_survive_filters_that_hide_them() {
    let mut session = Session::new(
        corpus(&["abc.com.br", "keepme.net", "other.com.br"]),
        10,
    );

    session.toggle_pick("abc.com.br");

    // hide the pick from view
    session.update_filters(|cfg| cfg.free_text = "keepme".to_string());
    assert_eq!(session.page_items(), vec!["keepme.net"]);

    let exported = session.selection().export();
    assert!(exported.contains("abc.com.br"));
}

#[test]
fn toggling_twice_leaves_the_selection_unchanged() {
    let mut session = big_session();

    session.toggle_pick("name001.com.br");
    session.toggle_pick("name001.com.br");

    assert!(session.selection().is_empty());
}

#[test]
fn export_lists_each_selected_domain_exactly_once() {
    let mut session = big_session();
    session.toggle_pick("name001.com.br");
    session.toggle_pick("name002.com.br");
    session.toggle_pick("name001.com.br");
    session.toggle_pick("name001.com.br");

    let exported = session.selection().export();
    let mut lines: Vec<&str> = exported.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["name001.com.br", "name002.com.br"]);
}

#[test]
fn stale_expansion_replies_never_clobber_newer_queries() {
    let mut session = big_session();

    // two queries race; the older one resolves last
    let older = session.begin_expansion();
    let newer = session.begin_expansion();

    assert!(session.apply_expansion(newer, vec!["name11".to_string()]));
    let matches_after_newer = session.match_count();

    assert!(!session.apply_expansion(older, vec!["name00".to_string()]));
    assert_eq!(session.filters().keywords, vec!["name11".to_string()]);
    assert_eq!(session.match_count(), matches_after_newer);
}

#[test]
fn navigation_cannot_leave_the_valid_page_range() {
    let mut session = big_session(); // 120 names, 10 per page

    session.goto_page(usize::MAX);
    assert_eq!(session.page().current, 12);

    for _ in 0..5 {
        session.next_page();
    }
    assert_eq!(session.page().current, 12);

    session.goto_page(0);
    assert_eq!(session.page().current, 1);
}
