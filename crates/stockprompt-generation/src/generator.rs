//! Generator: one domain's gate, history and collaborators behind a
//! single sequential API.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use stockprompt_core::config::StockpromptConfig;
use stockprompt_core::constants::ENRICHMENT_PROMPT_MAX_CHARS;
use stockprompt_core::domains::DomainDefinition;
use stockprompt_core::errors::{EnrichmentError, GenerationError, StorageError};
use stockprompt_core::models::{CandidateTuple, Enrichment, FeedbackLabel, HistoryRecord};
use stockprompt_core::traits::{ICandidateProposer, IEnrichmentService, IHistoryStore};
use stockprompt_observability::{enrichment_span, feedback_span, generation_span};

use crate::gate::{FeedbackGate, FeedbackOutcome, GateState};
use crate::interest::Interest;
use crate::orchestrator::{GenerationOrchestrator, GenerationReport};

/// Per-domain generator.
///
/// Takes `&mut self` for anything that can move the gate, so calls on one
/// instance are serialized by the borrow checker. Separate domains get
/// separate instances and never share state.
pub struct Generator {
    domain: DomainDefinition,
    store: Arc<dyn IHistoryStore>,
    gate: FeedbackGate,
    orchestrator: GenerationOrchestrator,
    proposer: Option<Arc<dyn ICandidateProposer>>,
    enricher: Option<Arc<dyn IEnrichmentService>>,
    enrichment_prompt_max_chars: usize,
    rng: StdRng,
}

impl Generator {
    /// Generator with default configuration and no remote collaborators.
    pub fn new(domain: DomainDefinition, store: Arc<dyn IHistoryStore>) -> Self {
        Self {
            domain,
            store,
            gate: FeedbackGate::new(),
            orchestrator: GenerationOrchestrator::default(),
            proposer: None,
            enricher: None,
            enrichment_prompt_max_chars: ENRICHMENT_PROMPT_MAX_CHARS,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_config(
        domain: DomainDefinition,
        store: Arc<dyn IHistoryStore>,
        config: &StockpromptConfig,
    ) -> Self {
        let mut generator = Self::new(domain, store);
        generator.orchestrator =
            GenerationOrchestrator::new(config.generation.clone(), config.preference.clone());
        generator.enrichment_prompt_max_chars = config.remote.enrichment_prompt_max_chars;
        generator
    }

    pub fn with_proposer(mut self, proposer: Arc<dyn ICandidateProposer>) -> Self {
        self.proposer = Some(proposer);
        self
    }

    pub fn with_enricher(mut self, enricher: Arc<dyn IEnrichmentService>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Reproducible fallback draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn domain(&self) -> &DomainDefinition {
        &self.domain
    }

    pub fn gate_state(&self) -> &GateState {
        self.gate.state()
    }

    pub fn can_generate(&self) -> bool {
        self.gate.can_generate()
    }

    /// Generate and commit one tuple.
    pub fn generate(&mut self) -> Result<CandidateTuple, GenerationError> {
        self.generate_with(&Interest::new())
    }

    /// Generate on behalf of a caller that may abandon the call.
    pub fn generate_with(&mut self, interest: &Interest) -> Result<CandidateTuple, GenerationError> {
        self.generate_with_report(interest).map(|report| report.tuple)
    }

    /// Full pipeline with bookkeeping. On success exactly one record is
    /// prepended to history and the gate awaits feedback on it. Any error
    /// leaves both untouched.
    pub fn generate_with_report(
        &mut self,
        interest: &Interest,
    ) -> Result<GenerationReport, GenerationError> {
        self.gate.check()?;
        let _span = generation_span!(self.domain.name()).entered();

        let history = self.store.list()?;
        let report = self.orchestrator.run(
            &self.domain,
            &history,
            self.proposer.as_deref(),
            interest,
            &mut self.rng,
        )?;

        if !interest.is_interested() {
            debug!("caller abandoned generation before commit");
            return Err(GenerationError::Abandoned);
        }
        if let Some(warning) = &report.warning {
            warn!(%warning, "committing a duplicate tuple");
        }

        self.store.prepend(&report.tuple)?;
        self.gate.close(&report.tuple.id);
        info!(
            tuple_id = %report.tuple.id,
            source = ?report.source,
            attempts = report.attempts,
            "tuple committed"
        );
        Ok(report)
    }

    /// Label a tuple. Only feedback on the awaited tuple reopens the gate;
    /// a label on an older record is stored without moving it.
    pub fn submit_feedback(
        &mut self,
        tuple_id: &str,
        label: FeedbackLabel,
    ) -> Result<FeedbackOutcome, StorageError> {
        let _span = feedback_span!(tuple_id, label).entered();

        let recorded = self.store.set_feedback(tuple_id, label)?;
        let outcome = if self.gate.resolve(tuple_id) {
            FeedbackOutcome::Reopened
        } else if recorded {
            FeedbackOutcome::RecordedStale
        } else {
            FeedbackOutcome::UnknownTuple
        };
        debug!(?outcome, recorded, "feedback processed");
        Ok(outcome)
    }

    /// Ask the enrichment service for a title and keywords and store them
    /// on the record. Failures are returned, never raised, and leave the
    /// gate alone.
    pub fn enrich(&self, tuple_id: &str) -> Result<Enrichment, EnrichmentError> {
        let _span = enrichment_span!(tuple_id).entered();

        let enricher = self.enricher.as_deref().ok_or_else(|| EnrichmentError::Unavailable {
            reason: "no enrichment service configured".to_string(),
        })?;
        let record = self
            .store
            .get(tuple_id)
            .map_err(storage_unavailable)?
            .ok_or_else(|| EnrichmentError::UnknownTuple {
                id: tuple_id.to_string(),
            })?;

        let prompt = truncate_chars(record.rendered_text.trim(), self.enrichment_prompt_max_chars);
        if prompt.is_empty() {
            return Err(EnrichmentError::EmptyPrompt);
        }

        let enrichment = enricher.enrich(prompt)?;
        self.store
            .set_enrichment(tuple_id, &enrichment.title, &enrichment.keywords)
            .map_err(storage_unavailable)?;
        debug!(keywords = enrichment.keywords.len(), "enrichment stored");
        Ok(enrichment)
    }

    /// Newest first.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        self.store.list()
    }

    /// Drop every record. The gate is left as it is.
    pub fn clear_history(&self) -> Result<(), StorageError> {
        info!(domain = %self.domain.name(), "clearing history");
        self.store.clear()
    }
}

fn storage_unavailable(err: StorageError) -> EnrichmentError {
    EnrichmentError::Unavailable {
        reason: format!("history store: {err}"),
    }
}

/// Longest prefix of at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
