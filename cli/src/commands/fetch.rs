//! Shared corpus acquisition for every subcommand.

use std::path::PathBuf;

use domlens_common::error::FetchError;
use domlens_core::source;
use domlens_remote::file::FileCorpusSource;
use domlens_remote::http::HttpCorpusSource;
use tracing::{Instrument, info_span};

use crate::commands::SourceArgs;

pub enum SourceKind {
    Url(String),
    File(PathBuf),
}

impl SourceKind {
    pub fn describe(&self) -> String {
        match self {
            SourceKind::Url(url) => url.clone(),
            SourceKind::File(path) => path.display().to_string(),
        }
    }
}

/// Picks the source: `--file` wins, then `--url`, then the
/// `DOMLENS_SOURCE_URL` environment variable.
pub fn resolve(args: &SourceArgs) -> anyhow::Result<SourceKind> {
    if let Some(path) = &args.file {
        return Ok(SourceKind::File(path.clone()));
    }
    if let Some(url) = &args.url {
        return Ok(SourceKind::Url(url.clone()));
    }
    if let Ok(url) = std::env::var("DOMLENS_SOURCE_URL") {
        if !url.is_empty() {
            return Ok(SourceKind::Url(url));
        }
    }
    anyhow::bail!("no domain list source: pass --url or --file, or set DOMLENS_SOURCE_URL")
}

/// Loads and ingests the corpus, with a spinner while the source works.
pub async fn load(origin: &SourceKind) -> Result<Vec<String>, FetchError> {
    let span = info_span!("loading domain list", indicatif.pb_show = true);

    match origin {
        SourceKind::Url(url) => {
            source::load_corpus(&HttpCorpusSource::new(url.as_str()))
                .instrument(span)
                .await
        }
        SourceKind::File(path) => {
            source::load_corpus(&FileCorpusSource::new(path.as_path()))
                .instrument(span)
                .await
        }
    }
}
