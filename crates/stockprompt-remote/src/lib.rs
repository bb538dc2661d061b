//! # stockprompt-remote
//!
//! Remote collaborators over an OpenAI-compatible chat-completions endpoint:
//! the candidate proposer and the title/keyword enrichment service. Both are
//! blocking, carry a per-request timeout, and never retry on their own; the
//! generator's attempt loop owns retries.

pub mod client;
pub mod enricher;
pub mod prompt;
pub mod proposer;
pub mod protocol;
pub mod sanitize;

pub use client::{ChatClient, TransportFailure};
pub use enricher::HttpEnrichmentService;
pub use proposer::HttpCandidateProposer;
