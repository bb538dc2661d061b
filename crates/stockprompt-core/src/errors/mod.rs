mod catalog_error;
mod config_error;
mod enrichment_error;
pub mod error_code;
mod generation_error;
mod remote_error;
mod stockprompt_error;
mod storage_error;
mod validation_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use enrichment_error::EnrichmentError;
pub use error_code::StockpromptErrorCode;
pub use generation_error::GenerationError;
pub use remote_error::RemoteError;
pub use stockprompt_error::{StockpromptError, StockpromptResult};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
