// SPDX-License-Identifier: Apache-2.0 OR MIT
// glog-style logging with sampling, first-N limiting and CHECK primitives
//
// Line format:
//   <L><MM><DD> <HH>:<MM>:<SS>.<uuuuuu> <PID|?????> <file>:<line>] <message>
//
// Flow:
// - log call -> filter (sampling, first-N) -> verbosity gate -> format -> sink
// - failed check -> FATAL record, "Check failed here:", one DEBUG record per
//   stack frame -> Err(CheckFailure)

mod capture;
mod check;
mod event;
mod filter;
pub mod format;
mod logger;
#[macro_use]
mod macros;
pub mod prefix;
mod severity;
mod sink;
pub mod stack;
mod surface;
mod verbosity;

// Public exports
pub use capture::capture_warnings;
pub use check::CheckFailure;
pub use event::LogEvent;
pub use filter::{LogOptions, SamplingState, ALWAYS_SAMPLE};
pub use format::{format_event, interpolate};
pub use logger::Logger;
pub use prefix::{LogPrefix, GLOG_PREFIX_REGEX};
pub use severity::{level_letter, level_name, Severity};
pub use sink::{LogSink, MemorySink, StderrSink, StdoutSink, WriterSink};
pub use stack::{capture_trace, render, StackFrame};
pub use surface::{LogSurface, NoOpSurface};
pub use verbosity::{parse_verbosity, VerbosityError};

use crate::config::LogConfig;

/// Build the process logger from configuration and apply its startup options.
///
/// Installs the `log` warnings bridge when `capture_warnings` is set.
pub fn init(config: &LogConfig) -> Logger {
    let logger = Logger::from_config(config);
    if !capture_warnings(&logger, config.capture_warnings) && config.capture_warnings {
        logger.warning("another log implementation is installed; warnings are not captured");
    }
    logger
}
