//! PreferenceProfile: per-category like/dislike counts derived from history.

use std::collections::BTreeMap;

use serde::Serialize;

use stockprompt_core::models::{FeedbackLabel, HistoryRecord};

type Counts = BTreeMap<String, BTreeMap<String, usize>>;

/// Liked and disliked values per category, with occurrence counts.
///
/// Only values whose count within a partition exceeds the signal floor are
/// present; single occurrences are treated as noise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreferenceProfile {
    liked: Counts,
    disliked: Counts,
}

impl PreferenceProfile {
    /// Partition history by feedback and count values per category.
    pub fn compute(history: &[HistoryRecord], signal_floor: usize) -> Self {
        let mut liked = Counts::new();
        let mut disliked = Counts::new();

        for record in history {
            let partition = match record.feedback {
                Some(FeedbackLabel::Like) => &mut liked,
                Some(FeedbackLabel::Dislike) => &mut disliked,
                Some(FeedbackLabel::Neutral) | None => continue,
            };
            for (category, value) in &record.values {
                let counts = partition.entry(category.clone()).or_default();
                for v in value.as_slice() {
                    *counts.entry(v.trim().to_string()).or_insert(0) += 1;
                }
            }
        }

        Self {
            liked: above_floor(liked, signal_floor),
            disliked: above_floor(disliked, signal_floor),
        }
    }

    pub fn liked_count(&self, category: &str, value: &str) -> usize {
        count(&self.liked, category, value)
    }

    pub fn disliked_count(&self, category: &str, value: &str) -> usize {
        count(&self.disliked, category, value)
    }

    /// Liked values of a category, alphabetically.
    pub fn liked(&self, category: &str) -> Vec<&str> {
        keys(&self.liked, category)
    }

    /// Disliked values of a category, alphabetically.
    pub fn disliked(&self, category: &str) -> Vec<&str> {
        keys(&self.disliked, category)
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty() && self.disliked.is_empty()
    }
}

fn above_floor(counts: Counts, floor: usize) -> Counts {
    counts
        .into_iter()
        .filter_map(|(category, values)| {
            let kept: BTreeMap<String, usize> =
                values.into_iter().filter(|(_, n)| *n > floor).collect();
            (!kept.is_empty()).then_some((category, kept))
        })
        .collect()
}

fn count(counts: &Counts, category: &str, value: &str) -> usize {
    counts
        .get(category)
        .and_then(|values| values.get(value))
        .copied()
        .unwrap_or(0)
}

fn keys<'a>(counts: &'a Counts, category: &str) -> Vec<&'a str> {
    counts
        .get(category)
        .map(|values| values.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
