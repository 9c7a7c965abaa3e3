//! # Selection Store
//!
//! The set of hand-picked domains. Independent of the active filter and
//! page: a domain picked while visible stays picked after it scrolls out
//! of view. Clearing is destructive, so the calling layer must gate it
//! behind an explicit confirmation.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct SelectionStore {
    picked: HashSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the domain if absent, removes it if present.
    ///
    /// Returns whether the domain is selected afterwards. Toggling twice
    /// is the identity.
    pub fn toggle(&mut self, domain: &str) -> bool {
        if self.picked.remove(domain) {
            false
        } else {
            self.picked.insert(domain.to_string());
            true
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.picked.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.picked.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }

    /// Newline-joined contents, one domain per line.
    ///
    /// Enumeration order is whatever the set yields; no ordering is
    /// promised to the user.
    pub fn export(&self) -> String {
        let lines: Vec<&str> = self.picked.iter().map(String::as_str).collect();
        lines.join("\n")
    }
}
