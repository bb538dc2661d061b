use super::error_code::{self, StockpromptErrorCode};

/// Errors raised while building a catalog or its template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("category {category} has no options")]
    EmptyOptions { category: String },

    #[error("category {category} must have at least one slot")]
    ZeroSlots { category: String },

    #[error("category {category} needs {slots} distinct values but has only {options} options")]
    TooFewOptions {
        category: String,
        slots: usize,
        options: usize,
    },

    #[error("category {category} lists option {option} more than once")]
    DuplicateOption { category: String, option: String },

    #[error("category {category} is defined more than once")]
    DuplicateCategory { category: String },

    #[error("template references unknown category {placeholder}")]
    UnknownPlaceholder { placeholder: String },

    #[error("template is malformed: {reason}")]
    MalformedTemplate { reason: String },
}

impl StockpromptErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
