//! Local-file corpus source, the manual fallback when the remote list
//! is unreachable.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domlens_common::error::FetchError;
use domlens_core::source::CorpusSource;

pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileCorpusSource {
    async fn load(&self) -> Result<Vec<String>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::File {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(lines_from_bytes(&bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Splits uploaded bytes into raw lines, tolerating invalid UTF-8.
///
/// Never fails: undecodable bytes are replaced, and whatever survives
/// ingestion normalization downstream is what the user gets.
pub fn lines_from_bytes(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

impl FileCorpusSource {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
