//! # stockprompt-learning
//!
//! Preference analysis: history → liked/disliked profile → per-value score →
//! working pools the generator draws from.
//! Recomputed on every generation call; nothing is cached.

pub mod analyzer;
pub mod hints;
pub mod profile;
pub mod scoring;

pub use analyzer::PreferenceAnalyzer;
pub use profile::PreferenceProfile;
pub use scoring::ScoreWeights;
