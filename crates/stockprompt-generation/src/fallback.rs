//! FallbackSelector: local tuple construction that always terminates.
//!
//! Single-slot categories draw from the working pool, preferring values not
//! yet tried during this call. Multi-slot categories exclude every value the
//! category has used anywhere in history; when fewer than `slots` values
//! remain, the category resets to its full catalog list. The remainder is
//! shuffled and the first `slots` values are taken.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use stockprompt_core::catalog::ParameterCategory;
use stockprompt_core::constants::{EXCLUSION_RESET_MARGIN, MAX_FALLBACK_ATTEMPTS};
use stockprompt_core::domains::DomainDefinition;
use stockprompt_core::models::{CategoryValue, HistoryRecord, TupleValues, WorkingPools};
use stockprompt_observability::fallback_span;
use stockprompt_validation::find_duplicate;

/// Non-fatal: every internal attempt produced a duplicate, so the last
/// built tuple was returned anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustionWarning {
    pub domain: String,
    pub attempts: usize,
}

impl fmt::Display for ExhaustionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fallback exhausted {} attempts in domain {}; accepting a duplicate",
            self.attempts, self.domain
        )
    }
}

/// A fallback tuple plus how it was reached.
#[derive(Debug, Clone)]
pub struct FallbackOutcome {
    pub values: TupleValues,
    pub rendered_text: String,
    pub attempts: usize,
    pub warning: Option<ExhaustionWarning>,
}

pub struct FallbackSelector<'a> {
    domain: &'a DomainDefinition,
    pools: &'a WorkingPools,
    max_attempts: usize,
    reset_margin: usize,
}

impl<'a> FallbackSelector<'a> {
    pub fn new(domain: &'a DomainDefinition, pools: &'a WorkingPools) -> Self {
        Self {
            domain,
            pools,
            max_attempts: MAX_FALLBACK_ATTEMPTS,
            reset_margin: EXCLUSION_RESET_MARGIN,
        }
    }

    /// Internal attempt budget. Clamped to at least one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Extra headroom a multi-slot remainder needs before it stops resetting.
    pub fn with_reset_margin(mut self, margin: usize) -> Self {
        self.reset_margin = margin;
        self
    }

    /// Build a tuple that avoids both duplicate layers if it can.
    pub fn select<R: Rng + ?Sized>(&self, history: &[HistoryRecord], rng: &mut R) -> FallbackOutcome {
        let _span = fallback_span!(self.domain.name(), history.len()).entered();

        let used = self.used_in_history(history);
        let mut tried: BTreeMap<&str, HashSet<String>> = BTreeMap::new();

        let mut attempts = 1;
        let (mut values, mut rendered_text) = self.build(&used, &mut tried, rng);
        while let Some(dup) = find_duplicate(&values, &rendered_text, history) {
            if attempts >= self.max_attempts {
                let warning = ExhaustionWarning {
                    domain: self.domain.name().to_string(),
                    attempts,
                };
                warn!(
                    domain = %warning.domain,
                    attempts,
                    duplicate_of = %dup.record_id(),
                    "fallback pool saturated, accepting duplicate"
                );
                return FallbackOutcome {
                    values,
                    rendered_text,
                    attempts,
                    warning: Some(warning),
                };
            }
            attempts += 1;
            (values, rendered_text) = self.build(&used, &mut tried, rng);
        }

        debug!(attempts, "fallback produced a novel tuple");
        FallbackOutcome {
            values,
            rendered_text,
            attempts,
            warning: None,
        }
    }

    fn build<R: Rng + ?Sized>(
        &self,
        used: &BTreeMap<&'a str, HashSet<&str>>,
        tried: &mut BTreeMap<&'a str, HashSet<String>>,
        rng: &mut R,
    ) -> (TupleValues, String) {
        let mut values = TupleValues::new();
        for category in self.domain.catalog().categories() {
            let value = if category.is_multi_slot() {
                CategoryValue::Multi(self.pick_distinct(category, used.get(category.name.as_str()), rng))
            } else {
                let tried = tried.entry(category.name.as_str()).or_default();
                CategoryValue::Single(self.pick_single(category, tried, rng))
            };
            values.insert(category.name.clone(), value);
        }
        let rendered = self.domain.render(&values);
        (values, rendered)
    }

    fn pick_single<R: Rng + ?Sized>(
        &self,
        category: &'a ParameterCategory,
        tried: &mut HashSet<String>,
        rng: &mut R,
    ) -> String {
        let pool = self.pool(category);
        let untried: Vec<&String> = pool.iter().filter(|v| !tried.contains(*v)).collect();
        let choice = if untried.is_empty() {
            tried.clear();
            pool.choose(rng)
        } else {
            untried.choose(rng).copied()
        };
        // The catalog guarantees non-empty options, so `choice` is set.
        let value = choice.cloned().unwrap_or_default();
        tried.insert(value.clone());
        value
    }

    fn pick_distinct<R: Rng + ?Sized>(
        &self,
        category: &'a ParameterCategory,
        used: Option<&HashSet<&str>>,
        rng: &mut R,
    ) -> Vec<String> {
        let mut remainder: Vec<&String> = self
            .pool(category)
            .iter()
            .filter(|v| used.map_or(true, |u| !u.contains(v.as_str())))
            .collect();
        if remainder.len() < category.slots + self.reset_margin {
            debug!(
                category = %category.name,
                remaining = remainder.len(),
                "multi-slot exclusion exhausted, resetting to full catalog"
            );
            remainder = category.options.iter().collect();
        }
        remainder.shuffle(rng);
        remainder.into_iter().take(category.slots).cloned().collect()
    }

    fn pool(&self, category: &'a ParameterCategory) -> &'a [String] {
        match self.pools.get(&category.name) {
            Some(pool) if pool.len() >= category.slots => pool,
            _ => &category.options,
        }
    }

    fn used_in_history<'h>(&self, history: &'h [HistoryRecord]) -> BTreeMap<&'a str, HashSet<&'h str>> {
        let mut used: BTreeMap<&'a str, HashSet<&'h str>> = BTreeMap::new();
        for category in self.domain.catalog().categories().iter().filter(|c| c.is_multi_slot()) {
            let seen = used.entry(category.name.as_str()).or_default();
            for record in history {
                if let Some(value) = record.value(&category.name) {
                    seen.extend(value.as_slice().iter().map(|v| v.trim()));
                }
            }
        }
        used
    }
}
