//! Prompt templates with `{category}` placeholders.

use crate::catalog::ParameterCatalog;
use crate::errors::CatalogError;
use crate::models::{CategoryValue, TupleValues};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed sentence template. Multi-slot values render as `a, b and c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse a template string. Braces must be balanced and non-nested.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            if let Some(stray) = rest[..open].find('}') {
                return Err(malformed(format!("unmatched '}}' at byte {stray}")));
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| malformed("unclosed '{'".to_string()))?;
            let name = after[..close].trim();
            if name.is_empty() || name.contains('{') {
                return Err(malformed(format!("bad placeholder '{{{}}}'", &after[..close])));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after[close + 1..];
        }
        if rest.contains('}') {
            return Err(malformed("unmatched '}'".to_string()));
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Parse and check every placeholder against a catalog.
    pub fn for_catalog(source: &str, catalog: &ParameterCatalog) -> Result<Self, CatalogError> {
        let template = Self::parse(source)?;
        for name in template.placeholders() {
            if catalog.category(name).is_none() {
                return Err(CatalogError::UnknownPlaceholder {
                    placeholder: name.to_string(),
                });
            }
        }
        Ok(template)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render a tuple. Placeholders without a value are left verbatim.
    pub fn render(&self, values: &TupleValues) -> String {
        let mut out = String::with_capacity(self.source.len() * 2);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => out.push_str(&join_value(value)),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

fn join_value(value: &CategoryValue) -> String {
    match value.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn malformed(reason: String) -> CatalogError {
    CatalogError::MalformedTemplate { reason }
}
