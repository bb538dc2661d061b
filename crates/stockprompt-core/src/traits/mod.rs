mod enricher;
mod history_store;
mod proposer;

pub use enricher::IEnrichmentService;
pub use history_store::{IHistoryStore, StorageResult};
pub use proposer::ICandidateProposer;
