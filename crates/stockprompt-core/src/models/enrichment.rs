use serde::{Deserialize, Serialize};

/// Sanitized title and keywords for a rendered prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub title: String,
    pub keywords: Vec<String>,
}

impl Enrichment {
    /// Keywords as the comma-joined string stock sites expect.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}
