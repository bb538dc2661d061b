//! ParameterCatalog: the fixed option lists one domain draws from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// One category of a catalog.
///
/// `slots == 1` is an ordinary category. `slots > 1` makes it a multi-slot
/// category: a tuple carries `slots` pairwise-distinct values drawn from
/// the same option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterCategory {
    pub name: String,
    pub options: Vec<String>,
    pub slots: usize,
}

impl ParameterCategory {
    /// A single-slot category.
    pub fn single(name: &str, options: &[&str]) -> Self {
        Self::multi(name, options, 1)
    }

    /// A category requiring `slots` distinct values.
    pub fn multi(name: &str, options: &[&str], slots: usize) -> Self {
        Self {
            name: name.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            slots,
        }
    }

    pub fn is_multi_slot(&self) -> bool {
        self.slots > 1
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.options.is_empty() {
            return Err(CatalogError::EmptyOptions {
                category: self.name.clone(),
            });
        }
        if self.slots == 0 {
            return Err(CatalogError::ZeroSlots {
                category: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    category: self.name.clone(),
                    option: option.clone(),
                });
            }
        }
        if self.slots > self.options.len() {
            return Err(CatalogError::TooFewOptions {
                category: self.name.clone(),
                slots: self.slots,
                options: self.options.len(),
            });
        }
        Ok(())
    }
}

/// Read-only, validated set of categories for one domain. Category order is
/// preserved and used wherever output order matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterCatalog {
    domain: String,
    categories: Vec<ParameterCategory>,
}

impl ParameterCatalog {
    /// Build a catalog, rejecting empty option lists, zero or unsatisfiable
    /// slot counts, and duplicate names.
    pub fn new(domain: &str, categories: Vec<ParameterCategory>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for category in &categories {
            category.check()?;
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    category: category.name.clone(),
                });
            }
        }
        Ok(Self {
            domain: domain.to_string(),
            categories,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn categories(&self) -> &[ParameterCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&ParameterCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
