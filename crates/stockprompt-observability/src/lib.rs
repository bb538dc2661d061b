//! # stockprompt-observability
//!
//! Structured logging for the generator: subscriber setup driven by
//! `STOCKPROMPT_LOG` and span macros per operation.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_json, log_startup};
