//! Stable error codes for the UI boundary.

/// Every error enum exposes a stable upper-snake code the UI can switch on.
pub trait StockpromptErrorCode {
    /// Returns the error code string (e.g., "FEEDBACK_PENDING").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REMOTE_UNAVAILABLE: &str = "REMOTE_UNAVAILABLE";
pub const REMOTE_TIMEOUT: &str = "REMOTE_TIMEOUT";
pub const ENRICHMENT_ERROR: &str = "ENRICHMENT_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FEEDBACK_PENDING: &str = "FEEDBACK_PENDING";
pub const ABANDONED: &str = "ABANDONED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
