use super::error_code::{self, StockpromptErrorCode};

/// Failures talking to the remote proposal service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("remote proposer is not configured")]
    NotConfigured,

    #[error("remote service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("remote quota exceeded: {reason}")]
    QuotaExceeded { reason: String },

    #[error("remote request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("remote service returned status {status}: {body}")]
    BadResponse { status: u16, body: String },

    /// The service answered but the reply could not be decoded.
    #[error("remote reply malformed: {reason}")]
    MalformedResponse { reason: String },
}

impl RemoteError {
    /// Timeouts consume one attempt; every other failure means the service
    /// is down for this call and the loop should fall back immediately.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// A reply that arrived but cannot be used. Counted like a proposal that
    /// failed validation: one attempt consumed, loop continues.
    pub fn is_rejected_reply(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

impl StockpromptErrorCode for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::REMOTE_TIMEOUT,
            Self::MalformedResponse { .. } => error_code::VALIDATION_ERROR,
            _ => error_code::REMOTE_UNAVAILABLE,
        }
    }
}
