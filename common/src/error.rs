//! Error taxonomy for the two fallible collaborators.
//!
//! Everything inside the engine itself is total: degenerate input yields
//! an empty or clamped result, never an error.

use thiserror::Error;

/// The domain list could not be obtained from its source.
///
/// Always recoverable: the caller offers the local-file fallback.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("domain list request failed: {0}")]
    Transport(String),

    #[error("domain list source answered with status {0}")]
    Status(u16),

    #[error("could not read local list '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("the source yielded no usable domains")]
    EmptyCorpus,
}

/// Semantic expansion could not produce keywords.
///
/// Consumed inside the expander by the literal fallback; callers never
/// see this as a blocking failure.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("no expansion endpoint configured")]
    Unconfigured,

    #[error("expansion request failed: {0}")]
    Transport(String),

    #[error("expansion endpoint answered with status {0}")]
    Status(u16),

    #[error("expansion reply had no usable content")]
    EmptyReply,
}
