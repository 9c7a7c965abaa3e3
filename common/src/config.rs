use std::env;

/// Results shown per page when the user never set a page size.
pub const DEFAULT_PER_PAGE: usize = 20;

pub struct Config {
    /// Suppresses decorative output.
    ///
    /// Level 1 drops headers and separators, level 2 keeps only results.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Page size the session starts with.
    pub per_page: usize,
}

/// Credentials and tuning for the semantic expansion endpoint.
///
/// Populated from the environment; an absent or empty key means the
/// expander runs in literal-fallback mode and never goes on the wire.
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Upper bound on keywords taken from one expansion reply.
    pub max_keywords: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_keywords: 8,
        }
    }
}

impl ExpansionConfig {
    /// Reads `DOMLENS_AI_KEY`, `DOMLENS_AI_URL` and `DOMLENS_AI_MODEL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("DOMLENS_AI_KEY").ok().filter(|k| !k.is_empty()),
            base_url: env::var("DOMLENS_AI_URL").unwrap_or(defaults.base_url),
            model: env::var("DOMLENS_AI_MODEL").unwrap_or(defaults.model),
            max_keywords: defaults.max_keywords,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}
