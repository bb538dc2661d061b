//! PreferenceAnalyzer: turns history into working pools.

use stockprompt_core::catalog::ParameterCatalog;
use stockprompt_core::config::PreferenceConfig;
use stockprompt_core::models::{HistoryRecord, WorkingPools};
use tracing::debug;

use crate::profile::PreferenceProfile;
use crate::scoring::ScoreWeights;

/// Derives preference profiles and filters catalog options by score.
#[derive(Debug, Clone, Default)]
pub struct PreferenceAnalyzer {
    config: PreferenceConfig,
}

impl PreferenceAnalyzer {
    pub fn new(config: PreferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PreferenceConfig {
        &self.config
    }

    pub fn compute_profile(&self, history: &[HistoryRecord]) -> PreferenceProfile {
        PreferenceProfile::compute(history, self.config.signal_floor)
    }

    /// Score of one value within a category.
    pub fn score(&self, profile: &PreferenceProfile, category: &str, value: &str) -> i64 {
        ScoreWeights::from(&self.config).score(
            profile.liked_count(category, value),
            profile.disliked_count(category, value),
        )
    }

    /// Options whose score is at least `min_score`, in catalog order.
    pub fn filter_by_preference(
        &self,
        options: &[String],
        category: &str,
        profile: &PreferenceProfile,
        min_score: i64,
    ) -> Vec<String> {
        options
            .iter()
            .filter(|option| self.score(profile, category, option) >= min_score)
            .cloned()
            .collect()
    }

    /// Working pool per category. A category whose filtered pool cannot
    /// fill its slots falls back to the full catalog list, so preference
    /// starvation never blocks generation.
    pub fn working_pools(
        &self,
        catalog: &ParameterCatalog,
        profile: &PreferenceProfile,
    ) -> WorkingPools {
        let mut pools = WorkingPools::new();
        for category in catalog.categories() {
            let filtered = self.filter_by_preference(
                &category.options,
                &category.name,
                profile,
                self.config.min_score,
            );
            let pool = if filtered.len() < category.slots {
                debug!(
                    category = %category.name,
                    kept = filtered.len(),
                    "preference pool starved, using full catalog"
                );
                category.options.clone()
            } else {
                filtered
            };
            pools.insert(&category.name, pool);
        }
        pools
    }
}
