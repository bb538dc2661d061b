//! GenerationOrchestrator: the attempt loop shared by every domain.
//!
//! propose → validate → dedup → accept, bounded by `max_remote_attempts`,
//! then the local fallback. The loop is strictly sequential: one remote
//! call in flight at a time. It never touches history or the gate; the
//! `Generator` commits the result.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, info, warn};

use stockprompt_core::config::{GenerationConfig, PreferenceConfig};
use stockprompt_core::constants::RECENT_HISTORY_WINDOW;
use stockprompt_core::domains::DomainDefinition;
use stockprompt_core::errors::{GenerationError, RemoteError};
use stockprompt_core::models::{CandidateTuple, HistoryRecord, ProposalRequest, RecentTuple};
use stockprompt_core::traits::ICandidateProposer;
use stockprompt_learning::hints::preference_hints;
use stockprompt_learning::PreferenceAnalyzer;
use stockprompt_observability::proposal_span;
use stockprompt_validation::{find_duplicate, CandidateValidator};

use crate::fallback::{ExhaustionWarning, FallbackSelector};
use crate::interest::Interest;

/// Where the accepted tuple came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Remote,
    Fallback,
}

/// Accepted tuple plus the attempt-loop bookkeeping that produced it.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub tuple: CandidateTuple,
    pub source: CandidateSource,
    /// Remote attempts consumed.
    pub attempts: usize,
    pub validation_rejections: usize,
    pub duplicate_rejections: usize,
    pub timeouts: usize,
    /// The remote error that ended the loop early, if any.
    pub short_circuited: Option<RemoteError>,
    pub warning: Option<ExhaustionWarning>,
}

/// Stateless driver for one generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerationOrchestrator {
    generation: GenerationConfig,
    analyzer: PreferenceAnalyzer,
    reset_margin: usize,
}

impl GenerationOrchestrator {
    pub fn new(generation: GenerationConfig, preference: PreferenceConfig) -> Self {
        let reset_margin = preference.exclusion_reset_margin;
        Self {
            generation,
            analyzer: PreferenceAnalyzer::new(preference),
            reset_margin,
        }
    }

    pub fn analyzer(&self) -> &PreferenceAnalyzer {
        &self.analyzer
    }

    /// Working pools and the proposal request for the given history.
    pub fn prepare(&self, domain: &DomainDefinition, history: &[HistoryRecord]) -> ProposalRequest {
        let catalog = domain.catalog();
        let profile = self.analyzer.compute_profile(history);
        let pools = self.analyzer.working_pools(catalog, &profile);
        let slots: BTreeMap<String, usize> = catalog
            .categories()
            .iter()
            .map(|c| (c.name.clone(), c.slots))
            .collect();
        let recent_history = history
            .iter()
            .take(self.generation.recent_history_window.min(RECENT_HISTORY_WINDOW))
            .map(RecentTuple::from)
            .collect();
        ProposalRequest {
            domain: domain.name().to_string(),
            pools,
            slots,
            recent_history,
            preference_hints: preference_hints(catalog, &profile),
        }
    }

    /// Run the loop. Returns `Abandoned` as soon as the caller's interest
    /// lapses after a remote call; otherwise always yields a tuple.
    pub fn run<R: Rng + ?Sized>(
        &self,
        domain: &DomainDefinition,
        history: &[HistoryRecord],
        proposer: Option<&dyn ICandidateProposer>,
        interest: &Interest,
        rng: &mut R,
    ) -> Result<GenerationReport, GenerationError> {
        let request = self.prepare(domain, history);
        let validator = CandidateValidator::new(domain);

        let mut report = LoopCounters::default();
        let short_circuited = match proposer {
            Some(proposer) => {
                match self.remote_loop(proposer, &request, &validator, history, interest, &mut report)? {
                    RemoteOutcome::Accepted(tuple) => {
                        info!(domain = %domain.name(), attempts = report.attempts, "remote proposal accepted");
                        return Ok(report.finish(tuple, CandidateSource::Remote, None, None));
                    }
                    RemoteOutcome::Exhausted => None,
                    RemoteOutcome::ShortCircuited(err) => Some(err),
                }
            }
            None => {
                debug!(domain = %domain.name(), "no proposer configured, using fallback");
                Some(RemoteError::NotConfigured)
            }
        };

        let fallback = FallbackSelector::new(domain, &request.pools)
            .with_max_attempts(self.generation.max_fallback_attempts)
            .with_reset_margin(self.reset_margin)
            .select(history, rng);
        let tuple = CandidateTuple::new(domain.name(), fallback.values, fallback.rendered_text);
        info!(
            domain = %domain.name(),
            fallback_attempts = fallback.attempts,
            "fallback tuple accepted"
        );
        Ok(report.finish(tuple, CandidateSource::Fallback, short_circuited, fallback.warning))
    }

    fn remote_loop(
        &self,
        proposer: &dyn ICandidateProposer,
        request: &ProposalRequest,
        validator: &CandidateValidator<'_>,
        history: &[HistoryRecord],
        interest: &Interest,
        counters: &mut LoopCounters,
    ) -> Result<RemoteOutcome, GenerationError> {
        while counters.attempts < self.generation.max_remote_attempts {
            counters.attempts += 1;
            let _span = proposal_span!(proposer.name(), counters.attempts).entered();

            let response = proposer.propose(request);
            if !interest.is_interested() {
                debug!("caller abandoned generation, discarding proposal");
                return Err(GenerationError::Abandoned);
            }

            let raw = match response {
                Ok(raw) => raw,
                Err(err) if err.is_transient() => {
                    counters.timeouts += 1;
                    debug!(error = %err, "proposal timed out, consuming attempt");
                    continue;
                }
                Err(err) if err.is_rejected_reply() => {
                    counters.validation_rejections += 1;
                    debug!(error = %err, "unreadable reply, consuming attempt");
                    continue;
                }
                Err(err) => {
                    warn!(error = %err, "proposer unavailable, short-circuiting to fallback");
                    return Ok(RemoteOutcome::ShortCircuited(err));
                }
            };

            let tuple = match validator.validate(&raw, &request.pools) {
                Ok(tuple) => tuple,
                Err(err) => {
                    counters.validation_rejections += 1;
                    debug!(error = %err, "proposal rejected");
                    continue;
                }
            };

            if let Some(dup) = find_duplicate(&tuple.values, &tuple.rendered_text, history) {
                counters.duplicate_rejections += 1;
                debug!(duplicate_of = %dup.record_id(), "proposal repeats history");
                continue;
            }

            return Ok(RemoteOutcome::Accepted(tuple));
        }
        debug!(attempts = counters.attempts, "remote attempts exhausted");
        Ok(RemoteOutcome::Exhausted)
    }
}

enum RemoteOutcome {
    Accepted(CandidateTuple),
    Exhausted,
    ShortCircuited(RemoteError),
}

#[derive(Default)]
struct LoopCounters {
    attempts: usize,
    validation_rejections: usize,
    duplicate_rejections: usize,
    timeouts: usize,
}

impl LoopCounters {
    fn finish(
        self,
        tuple: CandidateTuple,
        source: CandidateSource,
        short_circuited: Option<RemoteError>,
        warning: Option<ExhaustionWarning>,
    ) -> GenerationReport {
        GenerationReport {
            tuple,
            source,
            attempts: self.attempts,
            validation_rejections: self.validation_rejections,
            duplicate_rejections: self.duplicate_rejections,
            timeouts: self.timeouts,
            short_circuited,
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;
    use stockprompt_core::catalog::{ParameterCatalog, ParameterCategory};

    struct Scripted {
        responses: Mutex<Vec<Result<String, RemoteError>>>,
        calls: Mutex<usize>,
    }

    impl Scripted {
        fn new(mut responses: Vec<Result<String, RemoteError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl ICandidateProposer for Scripted {
        fn propose(&self, _request: &ProposalRequest) -> Result<String, RemoteError> {
            *self.calls.lock().unwrap() += 1;
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok("not json".into()))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn domain() -> DomainDefinition {
        let catalog = ParameterCatalog::new(
            "texture",
            vec![
                ParameterCategory::single("material", &["wood", "marble"]),
                ParameterCategory::multi("colors", &["red", "blue", "tan"], 2),
            ],
        )
        .unwrap();
        DomainDefinition::new(catalog, "{material} in {colors}").unwrap()
    }

    fn orchestrator(max_remote: usize) -> GenerationOrchestrator {
        let generation = GenerationConfig {
            max_remote_attempts: max_remote,
            ..GenerationConfig::default()
        };
        GenerationOrchestrator::new(generation, PreferenceConfig::default())
    }

    #[test]
    fn retries_past_garbage_then_accepts() {
        let d = domain();
        let proposer = Scripted::new(vec![
            Ok("nope".into()),
            Ok(r#"{"material": "steel", "colors": ["red", "blue"]}"#.into()),
            Ok(r#"{"material": "wood", "colors": ["red", "blue"]}"#.into()),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let report = orchestrator(10)
            .run(&d, &[], Some(&proposer), &Interest::new(), &mut rng)
            .unwrap();
        assert_eq!(report.source, CandidateSource::Remote);
        assert_eq!(report.attempts, 3);
        assert_eq!(report.validation_rejections, 2);
        assert_eq!(report.tuple.rendered_text, "wood in red and blue");
    }

    #[test]
    fn exhausting_remote_budget_falls_back() {
        let d = domain();
        let proposer = Scripted::new(vec![]);
        let mut rng = StdRng::seed_from_u64(2);
        let report = orchestrator(4)
            .run(&d, &[], Some(&proposer), &Interest::new(), &mut rng)
            .unwrap();
        assert_eq!(report.source, CandidateSource::Fallback);
        assert_eq!(report.attempts, 4);
        assert_eq!(proposer.calls(), 4);
        assert!(report.short_circuited.is_none());
    }

    #[test]
    fn unavailable_short_circuits_on_first_failure() {
        let d = domain();
        let proposer = Scripted::new(vec![Err(RemoteError::Unavailable {
            reason: "connection refused".into(),
        })]);
        let mut rng = StdRng::seed_from_u64(3);
        let report = orchestrator(50)
            .run(&d, &[], Some(&proposer), &Interest::new(), &mut rng)
            .unwrap();
        assert_eq!(proposer.calls(), 1);
        assert_eq!(report.source, CandidateSource::Fallback);
        assert!(matches!(report.short_circuited, Some(RemoteError::Unavailable { .. })));
    }

    #[test]
    fn timeouts_consume_attempts() {
        let d = domain();
        let proposer = Scripted::new(vec![
            Err(RemoteError::Timeout { after_ms: 20_000 }),
            Err(RemoteError::Timeout { after_ms: 20_000 }),
            Ok(r#"{"material": "marble", "colors": ["tan", "red"]}"#.into()),
        ]);
        let mut rng = StdRng::seed_from_u64(4);
        let report = orchestrator(50)
            .run(&d, &[], Some(&proposer), &Interest::new(), &mut rng)
            .unwrap();
        assert_eq!(report.timeouts, 2);
        assert_eq!(report.attempts, 3);
        assert_eq!(report.source, CandidateSource::Remote);
    }

    #[test]
    fn malformed_reply_consumes_one_attempt_and_loop_continues() {
        let d = domain();
        let proposer = Scripted::new(vec![
            Err(RemoteError::MalformedResponse {
                reason: "unexpected response envelope".into(),
            }),
            Ok(r#"{"material": "wood", "colors": ["tan", "blue"]}"#.into()),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        let report = orchestrator(50)
            .run(&d, &[], Some(&proposer), &Interest::new(), &mut rng)
            .unwrap();
        assert_eq!(proposer.calls(), 2);
        assert_eq!(report.source, CandidateSource::Remote);
        assert_eq!(report.attempts, 2);
        assert_eq!(report.validation_rejections, 1);
        assert!(report.short_circuited.is_none());
    }

    #[test]
    fn recent_history_is_capped_by_window() {
        let d = domain();
        let o = orchestrator(1);
        let mut rng = StdRng::seed_from_u64(9);
        let history: Vec<HistoryRecord> = (0..8)
            .map(|_| o.run(&d, &[], None, &Interest::new(), &mut rng).unwrap().tuple)
            .collect();
        let request = o.prepare(&d, &history);
        assert_eq!(request.recent_history.len(), 5);
        assert_eq!(request.slots["colors"], 2);
        assert_eq!(request.preference_hints, "No preference signal yet.");
    }

    #[test]
    fn oversized_window_never_sends_more_than_five_tuples() {
        let d = domain();
        let generation = GenerationConfig {
            max_remote_attempts: 1,
            recent_history_window: 10,
            ..GenerationConfig::default()
        };
        let o = GenerationOrchestrator::new(generation, PreferenceConfig::default());
        let mut rng = StdRng::seed_from_u64(10);
        let history: Vec<HistoryRecord> = (0..8)
            .map(|_| o.run(&d, &[], None, &Interest::new(), &mut rng).unwrap().tuple)
            .collect();
        assert_eq!(o.prepare(&d, &history).recent_history.len(), 5);
    }
}
