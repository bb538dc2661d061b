//! HTTP title/keyword enrichment service.

use serde::Deserialize;
use tracing::{debug, warn};

use stockprompt_core::config::RemoteConfig;
use stockprompt_core::errors::EnrichmentError;
use stockprompt_core::models::Enrichment;
use stockprompt_core::traits::IEnrichmentService;

use crate::client::ChatClient;
use crate::prompt::enrichment_messages;
use crate::sanitize::{sanitize_keywords, sanitize_title};

/// Keywords arrive either as an array or as one comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKeywords {
    List(Vec<String>),
    Joined(String),
}

#[derive(Debug, Deserialize)]
struct RawEnrichment {
    title: String,
    #[serde(default)]
    keywords: Option<RawKeywords>,
}

#[derive(Debug, Clone)]
pub struct HttpEnrichmentService {
    client: ChatClient,
}

impl HttpEnrichmentService {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self, EnrichmentError> {
        let url = config
            .enrichment_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| EnrichmentError::Unavailable {
                reason: "no enrichment url configured".to_string(),
            })?;
        let client = ChatClient::new(url, &config.model, config.timeout())?
            .with_api_key(config.api_key());
        Ok(Self::new(client))
    }
}

impl IEnrichmentService for HttpEnrichmentService {
    fn enrich(&self, prompt: &str) -> Result<Enrichment, EnrichmentError> {
        if prompt.trim().is_empty() {
            return Err(EnrichmentError::EmptyPrompt);
        }
        debug!(url = %self.client.url(), chars = prompt.chars().count(), "requesting enrichment");
        let content = self
            .client
            .complete(enrichment_messages(prompt))
            .map_err(|failure| {
                let err = EnrichmentError::from(failure);
                warn!(error = %err, "enrichment request failed");
                err
            })?;
        parse_enrichment(&content)
    }
}

/// Decode and sanitize an enrichment reply. Tolerates code fences.
pub fn parse_enrichment(content: &str) -> Result<Enrichment, EnrichmentError> {
    let body = strip_fence(content);
    let raw: RawEnrichment = serde_json::from_str(body).map_err(|e| EnrichmentError::Malformed {
        reason: e.to_string(),
    })?;

    let title = sanitize_title(&raw.title);
    if title.is_empty() {
        return Err(EnrichmentError::Malformed {
            reason: "empty title".to_string(),
        });
    }
    let keywords = match raw.keywords {
        Some(RawKeywords::List(list)) => sanitize_keywords(&list),
        Some(RawKeywords::Joined(joined)) => sanitize_keywords(&[joined]),
        None => Vec::new(),
    };
    Ok(Enrichment { title, keywords })
}

fn strip_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.split_once('\n').map_or("", |(_, body)| body);
            rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}
