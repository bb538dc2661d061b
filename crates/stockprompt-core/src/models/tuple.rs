use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeedbackLabel;

/// Value of one category inside a tuple. Multi-slot categories carry
/// their values in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Single(String),
    Multi(Vec<String>),
}

impl CategoryValue {
    /// The values as a slice, one element per slot.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multi(vs) => vs,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.as_slice().len()
    }
}

/// Category name → value, ordered by name.
pub type TupleValues = BTreeMap<String, CategoryValue>;

/// Lowercased, trimmed form used for text-level duplicate detection.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// One proposed or accepted set of category values plus its rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTuple {
    pub id: String,
    pub domain: String,
    pub values: TupleValues,
    pub rendered_text: String,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub feedback: Option<FeedbackLabel>,
}

/// A candidate tuple once it has been accepted into history.
pub type HistoryRecord = CandidateTuple;

impl CandidateTuple {
    /// A fresh, unlabeled tuple with a random id.
    pub fn new(domain: &str, values: TupleValues, rendered_text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            domain: domain.to_string(),
            values,
            rendered_text,
            created_at: Utc::now(),
            title: None,
            keywords: None,
            feedback: None,
        }
    }

    /// blake3 hash of the normalized rendered text.
    pub fn text_hash(&self) -> String {
        blake3::hash(normalize_text(&self.rendered_text).as_bytes())
            .to_hex()
            .to_string()
    }

    pub fn value(&self, category: &str) -> Option<&CategoryValue> {
        self.values.get(category)
    }
}

/// Per-category option lists a generation call may draw from, after
/// preference filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingPools(BTreeMap<String, Vec<String>>);

impl WorkingPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, options: Vec<String>) {
        self.0.insert(category.to_string(), options);
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.get(category)
            .is_some_and(|pool| pool.iter().any(|o| o == value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_values_decode_both_shapes() {
        let single: CategoryValue = serde_json::from_str("\"wood\"").unwrap();
        let multi: CategoryValue = serde_json::from_str("[\"red\",\"blue\"]").unwrap();
        assert_eq!(single.as_slice(), ["wood".to_string()]);
        assert_eq!(multi.slot_count(), 2);
    }

    #[test]
    fn text_hash_ignores_case_and_padding() {
        let a = CandidateTuple::new("t", TupleValues::new(), "  Soft Wood ".into());
        let b = CandidateTuple::new("t", TupleValues::new(), "soft wood".into());
        assert_eq!(a.text_hash(), b.text_hash());
        assert_ne!(a.id, b.id);
    }
}
