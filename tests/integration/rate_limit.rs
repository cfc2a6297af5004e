// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Integration Tests: sampling and first-N limiting through the public API.

use glogcheck::logging::{LogSurface, SamplingState};
use glogcheck::{log_with, LogConfig, LogOptions, Logger, MemorySink, Severity};
use std::sync::Arc;

fn create_logger(seed: u64) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::with_sink(Arc::new(sink.clone()), &LogConfig::default())
        .with_sampling_state(SamplingState::seeded(seed));
    (logger, sink)
}

#[test]
fn test_sampling_extremes() {
    let (logger, sink) = create_logger(11);
    for i in 0..1000 {
        log_with!(logger, Severity::Info, LogOptions::new().sampling(0), "never {}", i);
    }
    assert!(sink.is_empty());

    for i in 0..1000 {
        log_with!(logger, Severity::Info, LogOptions::new().sampling(100), "always {}", i);
    }
    assert_eq!(sink.len(), 1000);
}

#[test]
fn test_sampling_rate_is_approximate() {
    let (logger, sink) = create_logger(2024);
    let options = LogOptions::new().sampling(50);
    for _ in 0..10_000 {
        logger.log_with(Severity::Warning, &options, "half the time", &[]);
    }
    let kept = sink.len();
    assert!((4700..=5300).contains(&kept), "kept {} of 10000", kept);
}

#[test]
fn test_first_n_boundary() {
    let (logger, sink) = create_logger(0);
    let options = LogOptions::new().first_n(2);
    for _ in 0..5 {
        logger.log_with(Severity::Info, &options, "connection reset", &[]);
    }
    // Counter admits while <= first_n: first_n + 1 lines, the rest suppressed
    assert_eq!(sink.len(), 3);
    assert_eq!(logger.sampling_state().count("connection reset"), 3);
}

#[test]
fn test_first_n_shared_across_call_sites() {
    let (logger, sink) = create_logger(0);
    let options = LogOptions::new().first_n(1);
    logger.log_with(Severity::Info, &options, "shared {}", &[&"a"]);
    logger.log_with(Severity::Error, &options, "shared {}", &[&"b"]);
    logger.log_with(Severity::Info, &options, "shared {}", &[&"c"]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with('E'));
    assert!(lines[1].ends_with("] shared b"));
}

#[test]
fn test_first_n_counts_even_when_level_disabled() {
    let (logger, sink) = create_logger(0);
    let options = LogOptions::new().first_n(1);
    logger.log_with(Severity::Debug, &options, "startup", &[]);
    logger.log_with(Severity::Debug, &options, "startup", &[]);
    logger.log_with(Severity::Info, &options, "startup", &[]);

    assert!(sink.is_empty());
    assert_eq!(logger.sampling_state().count("startup"), 2);
}

#[test]
fn test_rate_limit_through_surface() {
    let (logger, sink) = create_logger(0);
    let surface: &dyn LogSurface = logger.lv(0);
    let options = LogOptions::new().first_n(1);
    for _ in 0..4 {
        surface.log_with(Severity::Info, &options, "via surface", &[]);
    }
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_concurrent_first_n() {
    let (logger, sink) = create_logger(0);
    let options = LogOptions::new().first_n(49);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    logger.log_with(Severity::Info, &options, "contended", &[]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(sink.len(), 50);
}
