// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Integration Test for the check-failure reporting pipeline.
//!
//! Drives a failing check through a real `Logger` and verifies the complete
//! output: record order, severities, source attribution and trace contents.

use anyhow::Result;
use glogcheck::logging::LogPrefix;
use glogcheck::{check_eq, check_notnone, CheckFailure, LogConfig, Logger, MemorySink, Severity};
use std::sync::Arc;

fn create_logger(verbosity: Severity) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let config = LogConfig {
        verbosity: verbosity.as_u8(),
        ..LogConfig::default()
    };
    (Logger::with_sink(Arc::new(sink.clone()), &config), sink)
}

#[inline(never)]
fn apply_batch(logger: &Logger, expected: usize, got: usize) -> Result<(), CheckFailure> {
    check_eq!(logger, expected, got, "batch size mismatch: {} vs {}", expected, got)
}

#[test]
fn test_failure_record_sequence() -> Result<()> {
    let (logger, sink) = create_logger(Severity::Info);

    let err = apply_batch(&logger, 8, 7).unwrap_err();
    assert_eq!(err.message, "batch size mismatch: 8 vs 7");

    let lines = sink.lines();
    let prefixes: Vec<LogPrefix> = lines
        .iter()
        .map(|l| LogPrefix::parse(l).ok_or_else(|| anyhow::anyhow!("unparseable: {}", l)))
        .collect::<Result<_>>()?;

    assert_eq!(prefixes[0].severity, 'F');
    assert_eq!(prefixes[0].message, "batch size mismatch: 8 vs 7");
    assert_eq!(prefixes[1].severity, 'D');
    assert_eq!(prefixes[1].message, "Check failed here:");
    assert!(prefixes.len() >= 3, "expected at least one trace line");
    assert!(prefixes[2..].iter().all(|p| p.severity == 'D' && p.message.starts_with('\t')));

    // Every record points at the caller of the check
    for prefix in &prefixes {
        assert_eq!(prefix.filename, "check_failure.rs");
        assert_eq!(prefix.line, err.line);
    }
    Ok(())
}

#[test]
#[cfg_attr(tarpaulin, ignore)]
fn test_trace_ends_at_caller() {
    let (logger, sink) = create_logger(Severity::Info);
    apply_batch(&logger, 1, 2).unwrap_err();

    let lines = sink.lines();
    let last = lines.last().unwrap();
    assert!(last.contains("\tcheck_failure.rs::apply_batch:"), "got {}", last);
    assert!(lines.iter().all(|l| !l.contains("::check_eq:")));
}

#[test]
fn test_failure_visible_at_any_verbosity() {
    let (logger, sink) = create_logger(Severity::Fatal);
    logger.info("filtered");
    let _ = check_notnone!(logger, None::<&str>);

    let lines = sink.lines();
    assert!(lines[0].starts_with('F'));
    assert!(lines[0].ends_with("] Check failed: Object is None."));
    assert!(lines[1].starts_with('D'));
}

#[test]
fn test_passing_check_is_silent() {
    let (logger, sink) = create_logger(Severity::Debug);
    check_eq!(logger, 5, 5).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_failure_converts_into_anyhow() {
    fn load(logger: &Logger) -> Result<()> {
        apply_batch(logger, 3, 4)?;
        Ok(())
    }

    let (logger, _sink) = create_logger(Severity::Info);
    let err = load(&logger).unwrap_err();
    assert!(err.is::<CheckFailure>());
    assert_eq!(err.to_string(), "batch size mismatch: 3 vs 4");
}
