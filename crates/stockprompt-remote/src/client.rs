//! Blocking chat-completions client with a per-request timeout.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use stockprompt_core::errors::{EnrichmentError, RemoteError};

use crate::protocol::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Error bodies are cut to this many characters before they are logged or
/// carried in an error.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// How one request failed, before it is mapped to a collaborator error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout { after_ms: u64 },
    RateLimited { body: String },
    Status { status: u16, body: String },
    Network { reason: String },
    Decode { reason: String },
}

impl From<TransportFailure> for RemoteError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout { after_ms } => RemoteError::Timeout { after_ms },
            TransportFailure::RateLimited { body } => RemoteError::QuotaExceeded { reason: body },
            TransportFailure::Status { status, body } => RemoteError::BadResponse { status, body },
            TransportFailure::Network { reason } => RemoteError::Unavailable { reason },
            TransportFailure::Decode { reason } => RemoteError::MalformedResponse { reason },
        }
    }
}

impl From<TransportFailure> for EnrichmentError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout { after_ms } => EnrichmentError::Timeout { after_ms },
            TransportFailure::RateLimited { body } => EnrichmentError::Unavailable {
                reason: format!("rate limited: {body}"),
            },
            TransportFailure::Status { status, body } => EnrichmentError::Unavailable {
                reason: format!("HTTP {status}: {body}"),
            },
            TransportFailure::Network { reason } => EnrichmentError::Unavailable { reason },
            TransportFailure::Decode { reason } => EnrichmentError::Malformed { reason },
        }
    }
}

/// One endpoint, one model. Never retries.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ChatClient {
    pub fn new(url: &str, model: &str, timeout: Duration) -> Result<Self, TransportFailure> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| TransportFailure::Network {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            url: url.to_string(),
            model: model.to_string(),
            api_key: None,
            timeout,
        })
    }

    /// Bearer token for authenticated endpoints.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one JSON-mode completion and return the first choice's content.
    pub fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, TransportFailure> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            response_format: ResponseFormat::json_object(),
        };

        let mut builder = self.http.post(&self.url).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().map_err(|e| self.classify(e))?;
        let status = response.status();
        if !status.is_success() {
            let body = truncate(&response.text().unwrap_or_default());
            debug!(%status, "chat endpoint returned an error status");
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                TransportFailure::RateLimited { body }
            } else {
                TransportFailure::Status {
                    status: status.as_u16(),
                    body,
                }
            });
        }

        response
            .json::<ChatResponse>()
            .map(ChatResponse::into_content)
            .map_err(|e| {
                if e.is_timeout() {
                    self.timed_out()
                } else {
                    TransportFailure::Decode {
                        reason: format!("unexpected response envelope: {e}"),
                    }
                }
            })
    }

    fn classify(&self, err: reqwest::Error) -> TransportFailure {
        if err.is_timeout() {
            self.timed_out()
        } else {
            TransportFailure::Network {
                reason: err.to_string(),
            }
        }
    }

    fn timed_out(&self) -> TransportFailure {
        TransportFailure::Timeout {
            after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
