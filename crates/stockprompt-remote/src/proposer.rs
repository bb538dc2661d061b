//! HTTP candidate proposer.

use tracing::{debug, warn};

use stockprompt_core::config::RemoteConfig;
use stockprompt_core::errors::RemoteError;
use stockprompt_core::models::ProposalRequest;
use stockprompt_core::traits::ICandidateProposer;

use crate::client::ChatClient;
use crate::prompt::proposal_messages;

/// Asks a chat-completions endpoint for one tuple per call. The raw
/// response text is returned untouched; validation happens in the
/// generator.
#[derive(Debug, Clone)]
pub struct HttpCandidateProposer {
    client: ChatClient,
}

impl HttpCandidateProposer {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// `NotConfigured` when no proposer URL is set.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let url = config
            .proposer_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(RemoteError::NotConfigured)?;
        let client = ChatClient::new(url, &config.model, config.timeout())?
            .with_api_key(config.api_key());
        Ok(Self::new(client))
    }
}

impl ICandidateProposer for HttpCandidateProposer {
    fn propose(&self, request: &ProposalRequest) -> Result<String, RemoteError> {
        debug!(url = %self.client.url(), domain = %request.domain, "requesting proposal");
        self.client
            .complete(proposal_messages(request))
            .map_err(|failure| {
                let err = RemoteError::from(failure);
                warn!(error = %err, "proposal request failed");
                err
            })
    }

    fn name(&self) -> &str {
        "http"
    }
}
