use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote proposer and enrichment service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Endpoint of the proposal service. `None` means local-only generation.
    pub proposer_url: Option<String>,
    /// Endpoint of the title/keyword enrichment service.
    pub enrichment_url: Option<String>,
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
    /// Model name forwarded to the service.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Rendered text is truncated to this many characters before enrichment.
    pub enrichment_prompt_max_chars: usize,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            proposer_url: None,
            enrichment_url: None,
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_REMOTE_TIMEOUT_SECS,
            enrichment_prompt_max_chars: defaults::DEFAULT_ENRICHMENT_PROMPT_MAX_CHARS,
        }
    }
}
