//! HTTP corpus source.
//!
//! Fetches the candidate list from a URL serving one domain per line.
//! Lines are delivered raw; ingestion normalization is the engine's job.

use async_trait::async_trait;
use domlens_common::error::FetchError;
use domlens_core::source::CorpusSource;
use tracing::debug;

pub struct HttpCorpusSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCorpusSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CorpusSource for HttpCorpusSource {
    async fn load(&self) -> Result<Vec<String>, FetchError> {
        debug!("fetching domain list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(body.lines().map(str::to_owned).collect())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
