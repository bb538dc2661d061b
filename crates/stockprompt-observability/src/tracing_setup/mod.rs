//! Tracing setup: structured logging plus span definitions.

pub mod spans;

use std::sync::Once;

use stockprompt_core::config::ObservabilityConfig;
use stockprompt_core::constants::VERSION;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "STOCKPROMPT_LOG";

/// Filter used when `STOCKPROMPT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "stockprompt=info";

/// Initialize human-readable logging.
///
/// Reads `STOCKPROMPT_LOG` for per-crate levels, e.g.
/// `STOCKPROMPT_LOG=stockprompt_generation=debug,stockprompt_remote=warn`.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        log_startup();
    });
}

/// Initialize JSON logging with an explicit filter. Idempotent.
pub fn init_tracing_json(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true))
            .with(filter)
            .try_init();
        log_startup();
    });
}

/// Initialize from the `[observability]` config section. `STOCKPROMPT_LOG`
/// still wins when set. Idempotent.
pub fn init_from_config(config: &ObservabilityConfig) {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| config.log_level.clone());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = config.json;
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let _ = if json {
            registry.with(fmt::layer().json().with_target(true)).try_init()
        } else {
            registry.with(fmt::layer().with_target(true)).try_init()
        };
        log_startup();
    });
}

/// Record the running version on the current subscriber.
pub fn log_startup() {
    tracing::info!(version = VERSION, "stockprompt logging initialized");
}
