use crate::errors::RemoteError;
use crate::models::ProposalRequest;

/// Remote source of candidate tuples.
///
/// Returns the raw, untrusted response body. Decoding and validation are
/// the caller's job; the proposer only reports transport failures.
pub trait ICandidateProposer: Send + Sync {
    fn propose(&self, request: &ProposalRequest) -> Result<String, RemoteError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
