use crate::errors::EnrichmentError;
use crate::models::Enrichment;

/// Title/keyword generation from rendered prompt text.
pub trait IEnrichmentService: Send + Sync {
    /// Produce a sanitized title and keyword list. Failures come back as
    /// typed errors, never panics.
    fn enrich(&self, prompt: &str) -> Result<Enrichment, EnrichmentError>;
}
