//! # stockprompt-generation
//!
//! Generation pipeline: feedback gate → preference pools → remote attempt
//! loop (propose → validate → dedup) → local fallback → commit.
//! One `Generator` per domain instance; it owns its gate and history.

pub mod fallback;
pub mod gate;
pub mod generator;
pub mod interest;
pub mod orchestrator;

pub use fallback::{ExhaustionWarning, FallbackOutcome, FallbackSelector};
pub use gate::{FeedbackGate, FeedbackOutcome, GateState};
pub use generator::Generator;
pub use interest::Interest;
pub use orchestrator::{CandidateSource, GenerationOrchestrator, GenerationReport};
