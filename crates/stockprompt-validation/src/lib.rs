//! # stockprompt-validation
//!
//! Gatekeeping for candidate tuples:
//! - `proposal`: decode an untrusted remote response into tuple values, or say why not.
//! - `duplicate`: tuple-level and text-level repeat detection against history.

pub mod duplicate;
pub mod proposal;

pub use duplicate::{find_duplicate, DuplicateMatch};
pub use proposal::CandidateValidator;
