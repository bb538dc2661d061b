use super::error_code::{self, StockpromptErrorCode};

/// Title/keyword enrichment failures. Returned as values, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("nothing to enrich: prompt text is empty")]
    EmptyPrompt,

    #[error("no history record with id {id}")]
    UnknownTuple { id: String },

    #[error("enrichment service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("enrichment request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("enrichment response malformed: {reason}")]
    Malformed { reason: String },
}

impl StockpromptErrorCode for EnrichmentError {
    fn error_code(&self) -> &'static str {
        error_code::ENRICHMENT_ERROR
    }
}
