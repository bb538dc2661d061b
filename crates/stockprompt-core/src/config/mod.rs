//! Layered configuration. Every section falls back to its defaults, so an
//! empty TOML document is a valid config.

pub mod defaults;
mod generation_config;
mod history_config;
mod observability_config;
mod preference_config;
mod remote_config;

pub use generation_config::GenerationConfig;
pub use history_config::HistoryConfig;
pub use observability_config::ObservabilityConfig;
pub use preference_config::PreferenceConfig;
pub use remote_config::RemoteConfig;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{ConfigError, StockpromptResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockpromptConfig {
    pub generation: GenerationConfig,
    pub preference: PreferenceConfig,
    pub history: HistoryConfig,
    pub remote: RemoteConfig,
    pub observability: ObservabilityConfig,
}

impl StockpromptConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> StockpromptResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the generator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.max_fallback_attempts == 0 {
            return Err(invalid(
                "generation.max_fallback_attempts",
                "must be at least 1",
            ));
        }
        if self.generation.recent_history_window > constants::RECENT_HISTORY_WINDOW {
            return Err(invalid(
                "generation.recent_history_window",
                &format!("must be at most {}", constants::RECENT_HISTORY_WINDOW),
            ));
        }
        if self.history.capacity == 0 {
            return Err(invalid("history.capacity", "must be at least 1"));
        }
        if self.remote.timeout_secs == 0 || self.remote.timeout_secs > defaults::MAX_REMOTE_TIMEOUT_SECS {
            return Err(invalid(
                "remote.timeout_secs",
                &format!("must be between 1 and {}", defaults::MAX_REMOTE_TIMEOUT_SECS),
            ));
        }
        if self.preference.like_weight < 0 || self.preference.dislike_weight < 0 {
            return Err(invalid("preference", "weights must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
