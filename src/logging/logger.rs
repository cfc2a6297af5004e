// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logger: the shared logging context (sink, verbosity, sampling counters)

use super::event::LogEvent;
use super::filter::{LogOptions, SamplingState};
use super::format::{format_event, interpolate};
use super::severity::level_name;
use super::sink::{LogSink, StderrSink, StdoutSink};
use super::verbosity::{parse_verbosity, VerbosityError};
use super::Severity;
use crate::config::{LogConfig, SinkTarget};
use std::fmt::Display;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Logger handle for emitting log lines
///
/// This is a lightweight handle that can be cloned and passed around; every
/// clone shares the same sink, verbosity level and sampling counters, so one
/// `Logger` built at startup serves the whole process.
///
/// All emitting methods are `#[track_caller]`: the file and line in the
/// rendered prefix are those of the code that called the logger.
pub struct Logger {
    sink: Arc<dyn LogSink>,
    /// Minimum numeric level that gets emitted (default: Info)
    verbosity: Arc<AtomicU8>,
    sampling: Arc<SamplingState>,
    /// Value compared by [`Logger::lv`]
    debug_gate: Arc<str>,
    log_process_id: bool,
}

impl Logger {
    /// Create a logger writing to `sink` with default settings
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_sink(sink, &LogConfig::default())
    }

    /// Create a logger that writes to stderr with default settings
    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrSink::new()))
    }

    /// Create a logger from configuration, using the configured output target
    pub fn from_config(config: &LogConfig) -> Self {
        let sink: Arc<dyn LogSink> = match config.target {
            SinkTarget::Stderr => Arc::new(StderrSink::new()),
            SinkTarget::Stdout => Arc::new(StdoutSink::new()),
        };
        Self::with_sink(sink, config)
    }

    /// Create a logger from configuration with an explicit sink
    pub fn with_sink(sink: Arc<dyn LogSink>, config: &LogConfig) -> Self {
        Self {
            sink,
            verbosity: Arc::new(AtomicU8::new(config.verbosity)),
            sampling: Arc::new(SamplingState::new()),
            debug_gate: Arc::from(config.debug_gate.as_str()),
            log_process_id: config.log_process_id,
        }
    }

    /// Replace the sampling state (e.g. with a seeded one)
    pub fn with_sampling_state(mut self, state: SamplingState) -> Self {
        self.sampling = Arc::new(state);
        self
    }

    /// Replace the gate value compared by [`Logger::lv`]
    pub fn with_debug_gate(mut self, gate: &str) -> Self {
        self.debug_gate = Arc::from(gate);
        self
    }

    pub(crate) fn debug_gate(&self) -> &str {
        &self.debug_gate
    }

    /// Counters and random source used for sampling and first-N limiting
    pub fn sampling_state(&self) -> &SamplingState {
        &self.sampling
    }

    /// Current verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Set the verbosity level and record the change at debug level
    #[track_caller]
    pub fn set_verbosity(&self, level: u8) {
        self.verbosity.store(level, Ordering::Relaxed);
        self.dispatch(
            Severity::Debug.as_u8(),
            &LogOptions::new(),
            "Log level set to {}",
            &[&level_name(level)],
            Location::caller(),
        );
    }

    /// Parse a numeric or symbolic level and apply it
    #[track_caller]
    pub fn set_verbosity_str(&self, level: &str) -> Result<u8, VerbosityError> {
        let parsed = parse_verbosity(level)?;
        self.set_verbosity(parsed);
        Ok(parsed)
    }

    /// Whether a record at `level` passes the verbosity gate
    #[inline]
    pub fn is_enabled(&self, level: u8) -> bool {
        level >= self.verbosity.load(Ordering::Relaxed)
    }

    /// Log a message at a raw numeric level
    #[track_caller]
    pub fn log(&self, level: u8, message: &str) {
        self.dispatch(level, &LogOptions::new(), message, &[], Location::caller());
    }

    /// Log with sampling / first-N options and `{}` template arguments.
    ///
    /// First-N counters are keyed by `template`, not by the rendered text.
    #[track_caller]
    pub fn log_with(
        &self,
        severity: Severity,
        options: &LogOptions,
        template: &str,
        args: &[&dyn Display],
    ) {
        self.dispatch(severity.as_u8(), options, template, args, Location::caller());
    }

    /// Log with debug severity
    #[inline]
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug.as_u8(), message);
    }

    /// Log with info severity
    #[inline]
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log(Severity::Info.as_u8(), message);
    }

    /// Log with warning severity
    #[inline]
    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning.as_u8(), message);
    }

    /// Log with error severity
    #[inline]
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log(Severity::Error.as_u8(), message);
    }

    /// Log with fatal severity (does not terminate the process)
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal.as_u8(), message);
    }

    /// Log an error and its chain of sources at error severity
    #[track_caller]
    pub fn exception(&self, message: &str, err: &(dyn std::error::Error + 'static)) {
        let mut text = format!("{}: {}", message, err);
        let mut source = err.source();
        while let Some(cause) = source {
            text.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        self.log(Severity::Error.as_u8(), &text);
    }

    fn dispatch(
        &self,
        level: u8,
        options: &LogOptions,
        template: &str,
        args: &[&dyn Display],
        location: &Location<'_>,
    ) {
        if !self.sampling.admit(options, template) {
            return;
        }
        if !self.is_enabled(level) {
            return;
        }
        let message = interpolate(template, args);
        self.emit_at(level, location.file(), location.line(), &message);
    }

    /// Format and write one record, bypassing verbosity and rate limiting
    pub(crate) fn emit_at(&self, level: u8, file: &str, line: u32, message: &str) {
        let mut event = LogEvent::with_level(level, file, line, message);
        if !self.log_process_id {
            event = event.with_process_id(None);
        }
        self.sink.emit(&format_event(&event));
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            verbosity: Arc::clone(&self.verbosity),
            sampling: Arc::clone(&self.sampling),
            debug_gate: Arc::clone(&self.debug_gate),
            log_process_id: self.log_process_id,
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity())
            .field("debug_gate", &self.debug_gate)
            .field("log_process_id", &self.log_process_id)
            .finish_non_exhaustive()
    }
}
