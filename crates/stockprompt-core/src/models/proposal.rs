use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CandidateTuple, FeedbackLabel, TupleValues, WorkingPools};

/// Compact view of a history tuple sent to the proposer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTuple {
    pub values: TupleValues,
    pub rendered_text: String,
    pub feedback: Option<FeedbackLabel>,
}

impl From<&CandidateTuple> for RecentTuple {
    fn from(tuple: &CandidateTuple) -> Self {
        Self {
            values: tuple.values.clone(),
            rendered_text: tuple.rendered_text.clone(),
            feedback: tuple.feedback,
        }
    }
}

/// What the remote proposer is asked to choose from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalRequest {
    pub domain: String,
    pub pools: WorkingPools,
    /// Slot count per category; categories above 1 expect a JSON array.
    pub slots: BTreeMap<String, usize>,
    pub recent_history: Vec<RecentTuple>,
    pub preference_hints: String,
}
