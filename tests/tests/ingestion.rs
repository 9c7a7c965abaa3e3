//! Corpus ingestion and collaborator fallback, wired end to end.

use std::io::Write;

use async_trait::async_trait;
use domlens_common::error::FetchError;
use domlens_core::session::Session;
use domlens_core::source::{self, CorpusSource, SemanticExpander};
use domlens_remote::expansion::HttpExpander;
use domlens_remote::file::FileCorpusSource;
use domlens_common::config::ExpansionConfig;

#[tokio::test]
async fn a_file_on_disk_becomes_a_normalized_corpus() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "  MinhaLoja.COM.BR ").unwrap();
    writeln!(tmp).unwrap();
    writeln!(tmp, "BigShop.NET").unwrap();

    let source = FileCorpusSource::new(tmp.path());
    let corpus = source::load_corpus(&source).await.unwrap();

    assert_eq!(corpus, vec!["minhaloja.com.br", "bigshop.net"]);
}

#[tokio::test]
async fn an_all_blank_file_is_an_empty_corpus_error() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "   ").unwrap();
    writeln!(tmp, "\t").unwrap();

    let source = FileCorpusSource::new(tmp.path());
    assert!(matches!(
        source::load_corpus(&source).await,
        Err(FetchError::EmptyCorpus)
    ));
}

struct FailingSource;

#[async_trait]
impl CorpusSource for FailingSource {
    async fn load(&self) -> Result<Vec<String>, FetchError> {
        Err(FetchError::Transport("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[tokio::test]
async fn fetch_failures_surface_as_fetch_errors() {
    assert!(matches!(
        source::load_corpus(&FailingSource).await,
        Err(FetchError::Transport(_))
    ));
}

#[tokio::test]
async fn unconfigured_expansion_degrades_to_literal_matching() {
    let expander = HttpExpander::new(ExpansionConfig {
        api_key: None,
        ..Default::default()
    });

    // the fallback keyword is the sanitized query, usable as-is
    let keywords = expander.expand("Minha Loja!").await;
    assert_eq!(keywords, vec!["minhaloja"]);

    let mut session = Session::new(
        vec!["minhaloja.com.br".to_string(), "outra.com.br".to_string()],
        10,
    );
    let token = session.begin_expansion();
    assert!(session.apply_expansion(token, keywords));
    assert_eq!(session.page_items(), vec!["minhaloja.com.br"]);
}
