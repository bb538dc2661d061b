use super::error_code::{self, StockpromptErrorCode};
use super::{
    CatalogError, ConfigError, EnrichmentError, GenerationError, RemoteError, StorageError,
    ValidationError,
};

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum StockpromptError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StockpromptErrorCode for StockpromptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Remote(e) => e.error_code(),
            Self::Enrichment(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias.
pub type StockpromptResult<T> = Result<T, StockpromptError>;
