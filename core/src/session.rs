//! # Explorer Session
//!
//! The one owner of application state: corpus, filter snapshot, page
//! position, selection, and the expansion request token. Mutations are
//! whole-field replacements; filter changes are detected by comparing
//! snapshots, and derived values are recomputed per call as explicit
//! composition (`paginate(filter(corpus, cfg), page)`), never cached.

use domlens_common::model::filter::FilterConfig;
use domlens_common::model::page::PageState;
use domlens_common::model::stats::DerivedStats;
use tracing::debug;

use crate::selection::SelectionStore;
use crate::{filter, paginate, stats};

pub struct Session {
    corpus: Vec<String>,
    filters: FilterConfig,
    page: PageState,
    selection: SelectionStore,
    /// Monotonic token for in-flight semantic expansions.
    expansion_seq: u64,
}

impl Session {
    /// Starts a session over an already-normalized corpus.
    pub fn new(corpus: Vec<String>, per_page: usize) -> Self {
        Self {
            corpus,
            filters: FilterConfig::default(),
            page: PageState::new(per_page),
            selection: SelectionStore::new(),
            expansion_seq: 0,
        }
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Swaps in a fresh corpus wholesale and goes back to page 1.
    ///
    /// The selection is untouched: picks outlive the list they were
    /// made from.
    pub fn replace_corpus(&mut self, corpus: Vec<String>) {
        self.corpus = corpus;
        self.page.current = 1;
    }

    /// Replaces the filter snapshot.
    ///
    /// A changed snapshot sends the user back to page 1; replacing with
    /// an equal snapshot is a no-op and keeps the current page.
    pub fn set_filters(&mut self, next: FilterConfig) {
        if next == self.filters {
            return;
        }
        self.filters = next;
        self.page.current = 1;
    }

    /// Clone-mutate-replace convenience over [`Session::set_filters`].
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterConfig)) {
        let mut next = self.filters.clone();
        change(&mut next);
        self.set_filters(next);
    }

    /// Changes the page size without touching the page position.
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 {
            self.page.per_page = per_page;
        }
    }

    /// Jumps to `target`, clamped into `1..=total_pages`.
    pub fn goto_page(&mut self, target: usize) {
        let last: usize = self.total_pages();
        self.page.current = target.clamp(1, last);
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page.current.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.current.saturating_sub(1));
    }

    /// The filtered subsequence of the corpus, in corpus order.
    pub fn filtered(&self) -> Vec<&str> {
        filter::apply(&self.corpus, &self.filters)
    }

    pub fn match_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.match_count(), self.page.per_page)
    }

    /// The slice of the filtered set the user is looking at.
    pub fn page_items(&self) -> Vec<&str> {
        let filtered = self.filtered();
        paginate::slice(&filtered, &self.page).to_vec()
    }

    pub fn stats(&self) -> DerivedStats {
        stats::aggregate(&self.filtered())
    }

    /// Toggles a pick. Membership is independent of visibility under the
    /// active filter.
    pub fn toggle_pick(&mut self, domain: &str) -> bool {
        self.selection.toggle(domain)
    }

    /// Drops every pick. The calling layer confirms with the user first.
    pub fn clear_picks(&mut self) {
        self.selection.clear();
    }

    /// Registers a new in-flight expansion and returns its token.
    ///
    /// Issuing a new token supersedes every earlier one.
    pub fn begin_expansion(&mut self) -> u64 {
        self.expansion_seq += 1;
        self.expansion_seq
    }

    /// Applies an expansion result, unless a newer request was issued in
    /// the meantime. Returns whether the keywords were applied.
    ///
    /// A slow reply must never clobber the keywords of a newer query.
    pub fn apply_expansion(&mut self, token: u64, keywords: Vec<String>) -> bool {
        if token != self.expansion_seq {
            debug!("dropping stale expansion reply (token {token}, latest {})", self.expansion_seq);
            return false;
        }
        self.update_filters(|cfg| cfg.keywords = keywords);
        true
    }

    /// Drops the active keywords, falling back to the literal free-text
    /// criterion.
    pub fn clear_keywords(&mut self) {
        self.update_filters(|cfg| cfg.keywords.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domlens_common::model::filter::ExtensionClass;

    fn session() -> Session {
        let corpus: Vec<String> = (0..100).map(|i| format!("domain{i:02}.com.br")).collect();
        Session::new(corpus, 10)
    }

    #[test]
    fn filter_change_resets_to_page_one() {
        let mut s = session();
        s.goto_page(5);
        assert_eq!(s.page().current, 5);

        s.update_filters(|cfg| cfg.extension = ExtensionClass::ComBr);
        assert_eq!(s.page().current, 1);
    }

    #[test]
    fn equal_filter_snapshot_keeps_the_page() {
        let mut s = session();
        s.goto_page(3);

        s.set_filters(s.filters().clone());
        assert_eq!(s.page().current, 3);
    }

    #[test]
    fn per_page_change_alone_keeps_the_page() {
        let mut s = session();
        s.goto_page(4);

        s.set_per_page(25);
        assert_eq!(s.page().current, 4);
        assert_eq!(s.page().per_page, 25);
    }

    #[test]
    fn corpus_replacement_resets_to_page_one() {
        let mut s = session();
        s.goto_page(7);

        s.replace_corpus(vec!["one.com".to_string()]);
        assert_eq!(s.page().current, 1);
        assert_eq!(s.corpus().len(), 1);
    }

    #[test]
    fn navigation_is_clamped_to_total_pages() {
        let mut s = session(); // 100 domains, 10 per page
        assert_eq!(s.total_pages(), 10);

        s.goto_page(999);
        assert_eq!(s.page().current, 10);

        s.next_page();
        assert_eq!(s.page().current, 10);

        s.goto_page(1);
        s.prev_page();
        assert_eq!(s.page().current, 1);
    }

    #[test]
    fn page_items_follow_the_filtered_set() {
        let mut s = session();
        s.update_filters(|cfg| cfg.free_text = "domain0".to_string());

        // domain00..domain09 match
        assert_eq!(s.match_count(), 10);
        assert_eq!(s.page_items().first(), Some(&"domain00.com.br"));
    }

    #[test]
    fn stale_expansion_reply_is_discarded() {
        let mut s = session();

        let first = s.begin_expansion();
        let second = s.begin_expansion();

        // the older request resolves late and must not apply
        assert!(!s.apply_expansion(first, vec!["stale".to_string()]));
        assert!(s.filters().keywords.is_empty());

        assert!(s.apply_expansion(second, vec!["fresh".to_string()]));
        assert_eq!(s.filters().keywords, vec!["fresh".to_string()]);
    }

    #[test]
    fn applying_keywords_resets_the_page() {
        let mut s = session();
        s.goto_page(5);

        let token = s.begin_expansion();
        assert!(s.apply_expansion(token, vec!["domain1".to_string()]));
        assert_eq!(s.page().current, 1);
    }

    #[test]
    fn picks_survive_filter_changes() {
        let mut s = session();
        s.toggle_pick("domain42.com.br");

        // filter the picked domain out of view
        s.update_filters(|cfg| cfg.free_text = "zzz".to_string());
        assert_eq!(s.match_count(), 0);

        assert!(s.selection().contains("domain42.com.br"));
        assert!(s.selection().export().contains("domain42.com.br"));
    }
}
