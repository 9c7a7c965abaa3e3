//! Semantic expansion over an OpenAI-compatible chat endpoint.
//!
//! Asks the model for literal substrings related to a free-text concept
//! ("pet shop" might come back as `pet, petshop, vet, animal, ...`).
//! Any failure, missing credentials included, degrades to the sanitized
//! original query so the search never blocks on the collaborator.

use async_trait::async_trait;
use domlens_common::config::ExpansionConfig;
use domlens_common::domain::sanitize_query;
use domlens_common::error::ExpansionError;
use domlens_core::source::SemanticExpander;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

const EXPANSION_PROMPT: &str = "You expand a domain-name search concept into related keywords. \
Answer with 5 to 8 short lowercase keywords separated by commas, \
no explanations. Include Portuguese variants when they are natural.";

pub struct HttpExpander {
    client: reqwest::Client,
    cfg: ExpansionConfig,
}

impl HttpExpander {
    pub fn new(cfg: ExpansionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            cfg,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ExpansionConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.is_configured()
    }

    async fn request_keywords(&self, query: &str) -> Result<Vec<String>, ExpansionError> {
        let Some(api_key) = self.cfg.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return Err(ExpansionError::Unconfigured);
        };

        let url = format!(
            "{}/chat/completions",
            self.cfg.base_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.cfg.model,
            "messages": [
                { "role": "system", "content": EXPANSION_PROMPT },
                { "role": "user", "content": query },
            ],
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ExpansionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExpansionError::Status(status.as_u16()));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ExpansionError::Transport(e.to_string()))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ExpansionError::EmptyReply)?;

        let keywords = parse_keywords(&content, self.cfg.max_keywords);
        if keywords.is_empty() {
            return Err(ExpansionError::EmptyReply);
        }

        debug!("expanded '{query}' into {keywords:?}");
        Ok(keywords)
    }
}

#[async_trait]
impl SemanticExpander for HttpExpander {
    async fn expand(&self, query: &str) -> Vec<String> {
        match self.request_keywords(query).await {
            Ok(keywords) => keywords,
            Err(ExpansionError::Unconfigured) => {
                debug!("expansion endpoint not configured, matching literally");
                vec![sanitize_query(query)]
            }
            Err(e) => {
                warn!("semantic expansion unavailable ({e}), matching literally");
                vec![sanitize_query(query)]
            }
        }
    }
}

#[derive(Deserialize)]
struct ChatReply {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Splits a model reply into sanitized, deduplicated keywords.
///
/// Tolerates commas, semicolons and newlines as separators since models
/// rarely honor the exact format asked for.
fn parse_keywords(content: &str, cap: usize) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for part in content.split([',', ';', '\n']) {
        let keyword = sanitize_query(part);
        if keyword.is_empty() || keywords.contains(&keyword) {
            continue;
        }
        keywords.push(keyword);
        if keywords.len() == cap {
            break;
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_are_sanitized_and_deduplicated() {
        let parsed = parse_keywords("Pet, pet-shop; VET\nanimal, pet", 8);
        assert_eq!(parsed, vec!["pet", "petshop", "vet", "animal"]);
    }

    #[test]
    fn keyword_cap_is_honored() {
        let parsed = parse_keywords("a, b, c, d, e", 3);
        assert_eq!(parsed, vec!["a", "b", "c"]);
    }

    #[test]
    fn garbage_reply_parses_to_nothing() {
        assert!(parse_keywords("---, !!!", 8).is_empty());
    }

    #[tokio::test]
    async fn unconfigured_expander_falls_back_to_the_literal_query() {
        let expander = HttpExpander::new(ExpansionConfig {
            api_key: None,
            ..Default::default()
        });

        let keywords = expander.expand("Pet Shop!").await;
        assert_eq!(keywords, vec!["petshop"]);
    }
}
