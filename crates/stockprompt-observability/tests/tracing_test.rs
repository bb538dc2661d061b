//! Tests for tracing setup and span macros.

use std::io;
use std::sync::{Arc, Mutex};

use stockprompt_core::config::ObservabilityConfig;
use stockprompt_observability::tracing_setup::spans::names;
use stockprompt_observability::{enrichment_span, feedback_span, generation_span, init_tracing};
use stockprompt_core::constants::VERSION;
use stockprompt_observability::{fallback_span, init_from_config, log_startup, proposal_span};

/// Serializes tests that touch `STOCKPROMPT_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("STOCKPROMPT_LOG", "stockprompt_generation=debug");
    init_tracing();
    init_tracing();
    init_from_config(&ObservabilityConfig::default());
    std::env::remove_var("STOCKPROMPT_LOG");
}

#[test]
fn span_macros_build_named_spans() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    let spans = [
        generation_span!("texture"),
        proposal_span!("http", 3),
        fallback_span!("sky", 12usize),
        feedback_span!("tuple-1", "like"),
        enrichment_span!("tuple-1"),
    ];
    for span in &spans {
        if let Some(meta) = span.metadata() {
            assert!(meta.name().starts_with("stockprompt."));
        }
    }
    assert_eq!(names::GENERATION, "stockprompt.generation");
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn startup_line_carries_crate_version() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, log_startup);

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("stockprompt logging initialized"));
    assert!(output.contains(VERSION));
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}
