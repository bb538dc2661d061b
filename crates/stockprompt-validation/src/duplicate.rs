//! Two independent duplicate layers.
//!
//! Layer 1 compares category values: exact, case-sensitive, trimmed, and
//! slot-order-sensitive. Layer 2 compares rendered text: trimmed and
//! case-insensitive. A candidate is a duplicate if either layer matches any
//! record, not necessarily the same one.

use stockprompt_core::models::{normalize_text, HistoryRecord, TupleValues};

/// Which layer flagged a candidate, and against which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateMatch {
    Tuple { record_id: String },
    Text { record_id: String },
}

impl DuplicateMatch {
    pub fn record_id(&self) -> &str {
        match self {
            Self::Tuple { record_id } | Self::Text { record_id } => record_id,
        }
    }
}

/// Layer 1: structural equality of two value maps.
pub fn tuple_matches(a: &TupleValues, b: &TupleValues) -> bool {
    a.len() == b.len()
        && a.iter().all(|(category, value)| {
            b.get(category).is_some_and(|other| {
                let (x, y) = (value.as_slice(), other.as_slice());
                x.len() == y.len() && x.iter().zip(y).all(|(p, q)| p.trim() == q.trim())
            })
        })
}

/// Layer 2: normalized rendered-text equality.
pub fn text_matches(a: &str, b: &str) -> bool {
    normalize_text(a) == normalize_text(b)
}

/// Run both layers against every record. Tuple matches are reported first.
pub fn find_duplicate(
    values: &TupleValues,
    rendered_text: &str,
    history: &[HistoryRecord],
) -> Option<DuplicateMatch> {
    if let Some(record) = history.iter().find(|r| tuple_matches(values, &r.values)) {
        return Some(DuplicateMatch::Tuple {
            record_id: record.id.clone(),
        });
    }
    let normalized = normalize_text(rendered_text);
    history
        .iter()
        .find(|r| normalize_text(&r.rendered_text) == normalized)
        .map(|record| DuplicateMatch::Text {
            record_id: record.id.clone(),
        })
}

/// True if either layer matches.
pub fn is_duplicate(values: &TupleValues, rendered_text: &str, history: &[HistoryRecord]) -> bool {
    find_duplicate(values, rendered_text, history).is_some()
}
