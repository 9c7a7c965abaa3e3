//! The central **abstractions** for the session's two collaborators.
//!
//! The engine never talks to the network itself: it consumes whole
//! values delivered through these traits. Concrete implementations live
//! in `domlens-remote`; the engine stays oblivious to whether a corpus
//! came over HTTP or from a file on disk, and to whether keywords came
//! from a model or from the literal fallback.

use async_trait::async_trait;
use domlens_common::domain::normalize_lines;
use domlens_common::error::FetchError;

/// Delivers the raw domain list, one candidate per line.
#[async_trait]
pub trait CorpusSource {
    async fn load(&self) -> Result<Vec<String>, FetchError>;

    /// Human-readable origin, for messages and logs.
    fn describe(&self) -> String;
}

/// Turns a free-text concept into literal substrings to match.
///
/// Infallible by contract: implementations must fall back to the
/// sanitized original query instead of failing the search.
#[async_trait]
pub trait SemanticExpander {
    async fn expand(&self, query: &str) -> Vec<String>;
}

/// Loads and ingests a corpus from any source.
///
/// Normalization (trim, lower-case, drop empties) is the engine's side
/// of the contract, applied here no matter where the lines came from.
pub async fn load_corpus<S>(source: &S) -> Result<Vec<String>, FetchError>
where
    S: CorpusSource + ?Sized,
{
    let raw = source.load().await?;
    let corpus = normalize_lines(raw);
    if corpus.is_empty() {
        return Err(FetchError::EmptyCorpus);
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedSource(Vec<String>);

    #[async_trait]
    impl CorpusSource for CannedSource {
        async fn load(&self) -> Result<Vec<String>, FetchError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "canned".to_string()
        }
    }

    #[tokio::test]
    async fn ingestion_normalizes_and_rejects_empty() {
        let source = CannedSource(vec![
            "  ABC.com.BR ".to_string(),
            String::new(),
            "xyz.net".to_string(),
        ]);
        let corpus = load_corpus(&source).await.unwrap();
        assert_eq!(corpus, vec!["abc.com.br", "xyz.net"]);

        let empty = CannedSource(vec!["   ".to_string()]);
        assert!(matches!(
            load_corpus(&empty).await,
            Err(FetchError::EmptyCorpus)
        ));
    }
}
