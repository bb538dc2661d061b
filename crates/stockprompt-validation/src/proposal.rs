//! CandidateValidator: schema-checked decode of an untrusted proposal.
//!
//! Checks run in a fixed order and the first failure is reported:
//! 1. every category key is present,
//! 2. every value is a string from the category's working pool,
//! 3. multi-slot categories have exactly `slots` pairwise-distinct values.

use std::collections::HashSet;

use serde_json::{Map, Value};

use stockprompt_core::catalog::ParameterCategory;
use stockprompt_core::domains::DomainDefinition;
use stockprompt_core::errors::ValidationError;
use stockprompt_core::models::{CandidateTuple, CategoryValue, TupleValues, WorkingPools};

/// Validates proposals for one domain.
#[derive(Debug, Clone, Copy)]
pub struct CandidateValidator<'a> {
    domain: &'a DomainDefinition,
}

impl<'a> CandidateValidator<'a> {
    pub fn new(domain: &'a DomainDefinition) -> Self {
        Self { domain }
    }

    /// Decode and validate, then render into a fresh candidate tuple.
    pub fn validate(&self, raw: &str, pools: &WorkingPools) -> Result<CandidateTuple, ValidationError> {
        let values = self.decode_values(raw, pools)?;
        let rendered = self.domain.render(&values);
        Ok(CandidateTuple::new(self.domain.name(), values, rendered))
    }

    /// Decode and validate without rendering.
    pub fn decode_values(&self, raw: &str, pools: &WorkingPools) -> Result<TupleValues, ValidationError> {
        let object = parse_object(raw)?;
        let categories = self.domain.catalog().categories();

        // 1. presence
        for category in categories {
            if object.get(&category.name).map_or(true, Value::is_null) {
                return Err(ValidationError::MissingCategory {
                    category: category.name.clone(),
                });
            }
        }

        // 2. shape and pool membership
        let mut extracted = Vec::with_capacity(categories.len());
        for category in categories {
            let values = extract_strings(category, &object[&category.name])?;
            let pool = pools.get(&category.name).unwrap_or(&[]);
            if let Some(outsider) = values.iter().find(|v| !pool.contains(v)) {
                return Err(ValidationError::OutOfPool {
                    category: category.name.clone(),
                    value: outsider.clone(),
                });
            }
            extracted.push((category, values));
        }

        // 3. slot count and distinctness
        let mut tuple = TupleValues::new();
        for (category, values) in extracted {
            if values.len() != category.slots {
                return Err(ValidationError::SlotCountMismatch {
                    category: category.name.clone(),
                    expected: category.slots,
                    actual: values.len(),
                });
            }
            let mut seen = HashSet::new();
            if let Some(repeat) = values.iter().find(|v| !seen.insert(v.as_str())) {
                return Err(ValidationError::RepeatedSlotValue {
                    category: category.name.clone(),
                    value: repeat.clone(),
                });
            }
            let value = if category.is_multi_slot() {
                CategoryValue::Multi(values)
            } else {
                CategoryValue::Single(values.into_iter().next().unwrap_or_default())
            };
            tuple.insert(category.name.clone(), value);
        }

        let extra = object.len().saturating_sub(tuple.len());
        if extra > 0 {
            tracing::debug!(extra, "proposal carried unknown keys, ignored");
        }
        Ok(tuple)
    }
}

/// Parse a JSON object, tolerating markdown code fences and surrounding prose.
fn parse_object(raw: &str) -> Result<Map<String, Value>, ValidationError> {
    let body = strip_code_fence(raw);
    let parsed = serde_json::from_str::<Value>(body).or_else(|first_err| {
        match (body.find('{'), body.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                serde_json::from_str::<Value>(&body[start..=end]).map_err(|_| first_err)
            }
            _ => Err(first_err),
        }
    });

    match parsed {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ValidationError::Malformed {
            reason: format!("expected an object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(ValidationError::Malformed {
            reason: e.to_string(),
        }),
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Single-slot categories take a string; multi-slot categories take an
/// array of strings (a bare string counts as one slot).
fn extract_strings(category: &ParameterCategory, value: &Value) -> Result<Vec<String>, ValidationError> {
    let wrong_shape = || ValidationError::WrongShape {
        category: category.name.clone(),
    };
    match value {
        Value::String(s) => Ok(vec![s.trim().to_string()]),
        Value::Array(items) if category.is_multi_slot() => items
            .iter()
            .map(|item| item.as_str().map(|s| s.trim().to_string()).ok_or_else(wrong_shape))
            .collect(),
        _ => Err(wrong_shape()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
