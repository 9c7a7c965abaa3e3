use crate::config::DEFAULT_PER_PAGE;

/// Where the user currently is in the filtered list.
///
/// `current` is 1-based. The session controller owns the reset rules:
/// a filter change or corpus replacement sends it back to 1, a page-size
/// change alone does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub per_page: usize,
}

impl PageState {
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}
