//! Shared helpers for the integration tests.

/// Builds an owned corpus from literals.
pub fn corpus(domains: &[&str]) -> Vec<String> {
    domains.iter().map(|d| d.to_string()).collect()
}
