//! Span definitions per operation: generation, proposal, fallback, feedback, enrichment.

/// Create a generation span.
#[macro_export]
macro_rules! generation_span {
    ($domain:expr) => {
        tracing::info_span!("stockprompt.generation", domain = %$domain)
    };
}

/// Create a span for one remote proposal attempt.
#[macro_export]
macro_rules! proposal_span {
    ($provider:expr, $attempt:expr) => {
        tracing::debug_span!("stockprompt.proposal", provider = %$provider, attempt = $attempt)
    };
}

/// Create a fallback-selection span.
#[macro_export]
macro_rules! fallback_span {
    ($domain:expr, $history_len:expr) => {
        tracing::info_span!("stockprompt.fallback", domain = %$domain, history_len = $history_len)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($tuple_id:expr, $label:expr) => {
        tracing::info_span!("stockprompt.feedback", tuple_id = %$tuple_id, label = %$label)
    };
}

/// Create an enrichment span.
#[macro_export]
macro_rules! enrichment_span {
    ($tuple_id:expr) => {
        tracing::info_span!("stockprompt.enrichment", tuple_id = %$tuple_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GENERATION: &str = "stockprompt.generation";
    pub const PROPOSAL: &str = "stockprompt.proposal";
    pub const FALLBACK: &str = "stockprompt.fallback";
    pub const FEEDBACK: &str = "stockprompt.feedback";
    pub const ENRICHMENT: &str = "stockprompt.enrichment";
}
