mod enrichment;
mod feedback;
mod proposal;
mod tuple;

pub use enrichment::Enrichment;
pub use feedback::FeedbackLabel;
pub use proposal::{ProposalRequest, RecentTuple};
pub use tuple::{normalize_text, CandidateTuple, CategoryValue, HistoryRecord, TupleValues, WorkingPools};
