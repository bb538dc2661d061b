//! Caller interest in an in-flight generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a caller flips when it no longer wants the result.
///
/// The generator checks it after every remote call and again right before
/// committing; once abandoned, nothing is written to history or the gate.
#[derive(Debug, Clone, Default)]
pub struct Interest {
    abandoned: Arc<AtomicBool>,
}

impl Interest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the call as abandoned. Cannot be undone.
    pub fn abandon(&self) {
        self.abandoned.store(true, Ordering::SeqCst);
    }

    pub fn is_interested(&self) -> bool {
        !self.abandoned.load(Ordering::SeqCst)
    }
}
