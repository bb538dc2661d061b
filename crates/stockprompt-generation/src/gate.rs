//! FeedbackGate: at most one ungraded generation per generator instance.

use stockprompt_core::errors::GenerationError;

/// Gate state. No timeout ever moves it; only correctly addressed feedback
/// reopens it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    AwaitingFeedback(String),
}

/// What a feedback submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Addressed the awaited tuple; the gate is open again.
    Reopened,
    /// Labeled an older tuple; the gate is unchanged.
    RecordedStale,
    /// No such tuple in history and not awaited; nothing changed.
    UnknownTuple,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackGate {
    state: GateState,
}

impl FeedbackGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn can_generate(&self) -> bool {
        self.state == GateState::Idle
    }

    /// `Ok` when idle, `FeedbackPending` otherwise.
    pub fn check(&self) -> Result<(), GenerationError> {
        match &self.state {
            GateState::Idle => Ok(()),
            GateState::AwaitingFeedback(id) => Err(GenerationError::FeedbackPending {
                awaiting: id.clone(),
            }),
        }
    }

    /// Close the gate on a freshly accepted tuple.
    pub fn close(&mut self, tuple_id: &str) {
        self.state = GateState::AwaitingFeedback(tuple_id.to_string());
    }

    /// Reopen if `tuple_id` is the awaited one. Returns whether it reopened.
    pub fn resolve(&mut self, tuple_id: &str) -> bool {
        match &self.state {
            GateState::AwaitingFeedback(awaited) if awaited == tuple_id => {
                self.state = GateState::Idle;
                true
            }
            _ => false,
        }
    }
}
