//! End-to-end generator behavior: gate, fallback, remote loop, abandonment,
//! enrichment.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use stockprompt_core::catalog::{ParameterCatalog, ParameterCategory};
use stockprompt_core::domains::{self, DomainDefinition};
use stockprompt_core::errors::{EnrichmentError, GenerationError, RemoteError};
use stockprompt_core::models::{Enrichment, FeedbackLabel, ProposalRequest};
use stockprompt_core::traits::{ICandidateProposer, IEnrichmentService, IHistoryStore};
use stockprompt_generation::{CandidateSource, FeedbackOutcome, GateState, Generator, Interest};
use stockprompt_storage::{InMemoryHistoryStore, SqliteHistoryStore};

// ─── Test doubles ───────────────────────────────────────────────────────

struct DownProposer;

impl ICandidateProposer for DownProposer {
    fn propose(&self, _request: &ProposalRequest) -> Result<String, RemoteError> {
        Err(RemoteError::Unavailable {
            reason: "connection refused".into(),
        })
    }

    fn name(&self) -> &str {
        "down"
    }
}

/// Replays canned responses, then keeps returning the last one.
struct Replay {
    responses: Vec<String>,
    calls: Mutex<usize>,
    requests: Mutex<Vec<ProposalRequest>>,
}

impl Replay {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|r| r.to_string()).collect(),
            calls: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ICandidateProposer for Replay {
    fn propose(&self, request: &ProposalRequest) -> Result<String, RemoteError> {
        let mut calls = self.calls.lock().unwrap();
        let idx = (*calls).min(self.responses.len() - 1);
        *calls += 1;
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.responses[idx].clone())
    }

    fn name(&self) -> &str {
        "replay"
    }
}

/// Abandons the caller's interest while the call is in flight.
struct Abandoning {
    interest: Interest,
}

impl ICandidateProposer for Abandoning {
    fn propose(&self, _request: &ProposalRequest) -> Result<String, RemoteError> {
        self.interest.abandon();
        Ok(r#"{"material": "wood", "primary": "red", "secondary": "tan", "light": "soft"}"#.into())
    }

    fn name(&self) -> &str {
        "abandoning"
    }
}

struct FixedEnricher(Result<Enrichment, EnrichmentError>);

impl IEnrichmentService for FixedEnricher {
    fn enrich(&self, prompt: &str) -> Result<Enrichment, EnrichmentError> {
        assert!(!prompt.is_empty());
        self.0.clone()
    }
}

// ─── Fixtures ───────────────────────────────────────────────────────────

fn small_domain() -> DomainDefinition {
    let catalog = ParameterCatalog::new(
        "mini",
        vec![
            ParameterCategory::single("material", &["wood", "marble"]),
            ParameterCategory::single("primary", &["red", "blue"]),
            ParameterCategory::single("secondary", &["tan", "gray"]),
            ParameterCategory::single("light", &["soft", "hard"]),
        ],
    )
    .unwrap();
    DomainDefinition::new(
        catalog,
        "A {material} surface in {primary} and {secondary}, {light} light",
    )
    .unwrap()
}

fn store() -> Arc<InMemoryHistoryStore> {
    Arc::new(InMemoryHistoryStore::new(50))
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn unavailable_proposer_falls_back_and_commits_once() {
    let d = small_domain();
    let catalog = d.catalog().clone();
    let history = store();
    let mut generator = Generator::new(d, history.clone())
        .with_proposer(Arc::new(DownProposer))
        .with_seed(42);

    let report = generator.generate_with_report(&Interest::new()).unwrap();
    assert_eq!(report.source, CandidateSource::Fallback);
    assert_eq!(report.attempts, 1);
    for category in catalog.categories() {
        let value = report.tuple.value(&category.name).unwrap();
        assert!(value.as_slice().iter().all(|v| category.contains(v)));
    }
    assert_eq!(history.list().unwrap().len(), 1);
    assert_eq!(
        generator.gate_state(),
        &GateState::AwaitingFeedback(report.tuple.id.clone())
    );
}

#[test]
fn second_generate_without_feedback_is_rejected() {
    let history = store();
    let mut generator = Generator::new(small_domain(), history.clone()).with_seed(1);
    let first = generator.generate().unwrap();

    let err = generator.generate().unwrap_err();
    assert_eq!(
        err,
        GenerationError::FeedbackPending {
            awaiting: first.id.clone()
        }
    );
    assert_eq!(history.len().unwrap(), 1);
    assert!(!generator.can_generate());
}

#[test]
fn only_feedback_on_the_awaited_tuple_reopens() {
    let mut generator = Generator::new(small_domain(), store()).with_seed(2);
    let first = generator.generate().unwrap();
    assert_eq!(
        generator.submit_feedback(&first.id, FeedbackLabel::Like).unwrap(),
        FeedbackOutcome::Reopened
    );
    let second = generator.generate().unwrap();

    // Late label on the older tuple is stored but leaves the gate closed.
    assert_eq!(
        generator.submit_feedback(&first.id, FeedbackLabel::Dislike).unwrap(),
        FeedbackOutcome::RecordedStale
    );
    assert!(!generator.can_generate());
    assert_eq!(
        generator.submit_feedback("no-such-id", FeedbackLabel::Like).unwrap(),
        FeedbackOutcome::UnknownTuple
    );
    assert!(!generator.can_generate());

    generator.submit_feedback(&second.id, FeedbackLabel::Neutral).unwrap();
    assert!(generator.can_generate());
    let stored = generator.history().unwrap();
    assert_eq!(stored[1].feedback, Some(FeedbackLabel::Dislike));
}

#[test]
fn remote_proposal_is_accepted_after_duplicate_retry() {
    let history = store();
    let proposer = Arc::new(Replay::new(&[
        r#"{"material": "wood", "primary": "red", "secondary": "tan", "light": "soft"}"#,
        r#"{"material": "wood", "primary": "red", "secondary": "tan", "light": "soft"}"#,
        r#"{"material": "marble", "primary": "blue", "secondary": "gray", "light": "hard"}"#,
    ]));
    let mut generator = Generator::new(small_domain(), history.clone())
        .with_proposer(proposer.clone())
        .with_seed(3);

    let first = generator.generate_with_report(&Interest::new()).unwrap();
    assert_eq!(first.source, CandidateSource::Remote);
    generator.submit_feedback(&first.tuple.id, FeedbackLabel::Like).unwrap();

    let second = generator.generate_with_report(&Interest::new()).unwrap();
    assert_eq!(second.source, CandidateSource::Remote);
    assert_eq!(second.duplicate_rejections, 1);
    assert_eq!(second.attempts, 2);
    assert_eq!(
        second.tuple.rendered_text,
        "A marble surface in blue and gray, hard light"
    );
    assert_eq!(proposer.calls(), 3);

    // The proposer saw the committed tuple in its recent-history summary.
    let requests = proposer.requests.lock().unwrap();
    assert_eq!(requests[1].recent_history.len(), 1);
    assert_eq!(requests[1].domain, "mini");
}

#[test]
fn abandoned_call_commits_nothing() {
    let history = store();
    let interest = Interest::new();
    let mut generator = Generator::new(small_domain(), history.clone())
        .with_proposer(Arc::new(Abandoning {
            interest: interest.clone(),
        }))
        .with_seed(4);

    assert_eq!(
        generator.generate_with(&interest).unwrap_err(),
        GenerationError::Abandoned
    );
    assert!(history.list().unwrap().is_empty());
    assert!(generator.can_generate());
}

#[test]
fn abandoned_before_commit_on_local_path() {
    let history = store();
    let interest = Interest::new();
    interest.abandon();
    let mut generator = Generator::new(small_domain(), history.clone()).with_seed(5);
    assert_eq!(
        generator.generate_with(&interest).unwrap_err(),
        GenerationError::Abandoned
    );
    assert_eq!(history.len().unwrap(), 0);
    assert_eq!(generator.gate_state(), &GateState::Idle);
}

#[test]
fn three_of_three_slots_uses_every_option() {
    let catalog = ParameterCatalog::new(
        "tri",
        vec![ParameterCategory::multi("colors", &["red", "green", "blue"], 3)],
    )
    .unwrap();
    let d = DomainDefinition::new(catalog, "{colors}").unwrap();
    for seed in 0..20 {
        let mut generator = Generator::new(d.clone(), store()).with_seed(seed);
        let tuple = generator.generate().unwrap();
        let mut colors: Vec<_> = tuple.values["colors"].as_slice().to_vec();
        colors.sort();
        assert_eq!(colors, vec!["blue", "green", "red"]);
    }
}

#[test]
fn built_in_domains_do_not_repeat_early() {
    for definition in domains::all().unwrap() {
        let name = definition.name().to_string();
        let mut generator = Generator::new(definition, store()).with_seed(7);
        let mut texts = HashSet::new();
        for _ in 0..15 {
            let tuple = generator.generate().unwrap();
            assert!(texts.insert(tuple.rendered_text.to_lowercase()), "repeat in {name}");
            generator.submit_feedback(&tuple.id, FeedbackLabel::Neutral).unwrap();
        }
    }
}

#[test]
fn clear_history_keeps_gate_closed() {
    let mut generator = Generator::new(small_domain(), store()).with_seed(6);
    let tuple = generator.generate().unwrap();
    generator.clear_history().unwrap();
    assert!(generator.history().unwrap().is_empty());
    assert!(!generator.can_generate());

    // The awaited id still reopens even though its record is gone.
    assert_eq!(
        generator.submit_feedback(&tuple.id, FeedbackLabel::Like).unwrap(),
        FeedbackOutcome::Reopened
    );
    assert!(generator.can_generate());
}

#[test]
fn enrichment_is_stored_on_the_record() {
    let history = store();
    let enrichment = Enrichment {
        title: "Warm wooden surface".into(),
        keywords: vec!["wood".into(), "texture".into()],
    };
    let mut generator = Generator::new(small_domain(), history.clone())
        .with_enricher(Arc::new(FixedEnricher(Ok(enrichment.clone()))))
        .with_seed(8);
    let tuple = generator.generate().unwrap();

    assert_eq!(generator.enrich(&tuple.id).unwrap(), enrichment);
    let stored = history.get(&tuple.id).unwrap().unwrap();
    assert_eq!(stored.title.as_deref(), Some("Warm wooden surface"));
    assert_eq!(stored.keywords, Some(enrichment.keywords));
    assert_eq!(
        generator.enrich("missing").unwrap_err(),
        EnrichmentError::UnknownTuple {
            id: "missing".into()
        }
    );
}

#[test]
fn enrichment_failures_are_values_and_leave_gate_alone() {
    let mut generator = Generator::new(small_domain(), store())
        .with_enricher(Arc::new(FixedEnricher(Err(EnrichmentError::Timeout {
            after_ms: 20_000,
        }))))
        .with_seed(9);
    let tuple = generator.generate().unwrap();
    assert!(matches!(
        generator.enrich(&tuple.id),
        Err(EnrichmentError::Timeout { .. })
    ));
    assert_eq!(generator.gate_state(), &GateState::AwaitingFeedback(tuple.id));

    let plain = Generator::new(small_domain(), store());
    assert!(matches!(
        plain.enrich("x"),
        Err(EnrichmentError::Unavailable { .. })
    ));
}

#[test]
fn sqlite_history_survives_a_new_generator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.db");

    let tuple = {
        let sqlite = Arc::new(SqliteHistoryStore::open(&path, "mini", 50).unwrap());
        let mut generator = Generator::new(small_domain(), sqlite).with_seed(10);
        generator.generate().unwrap()
    };

    let sqlite = Arc::new(SqliteHistoryStore::open(&path, "mini", 50).unwrap());
    let generator = Generator::new(small_domain(), sqlite);
    let history = generator.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, tuple.id);
    assert_eq!(history[0].values, tuple.values);
}
