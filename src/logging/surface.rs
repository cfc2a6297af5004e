// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging surface: active logger or no-op, chosen by the debug gate

use super::filter::LogOptions;
use super::{Logger, Severity};
use std::error::Error;
use std::fmt::Display;

/// The leveled logging calls shared by [`Logger`] and [`NoOpSurface`]
pub trait LogSurface: Send + Sync {
    fn log(&self, level: u8, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn fatal(&self, message: &str);
    fn log_with(
        &self,
        severity: Severity,
        options: &LogOptions,
        template: &str,
        args: &[&dyn Display],
    );
    fn exception(&self, message: &str, err: &(dyn Error + 'static));
    /// False for the no-op surface
    fn is_active(&self) -> bool;
}

impl LogSurface for Logger {
    #[track_caller]
    fn log(&self, level: u8, message: &str) {
        Logger::log(self, level, message);
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        Logger::debug(self, message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        Logger::info(self, message);
    }

    #[track_caller]
    fn warning(&self, message: &str) {
        Logger::warning(self, message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        Logger::error(self, message);
    }

    #[track_caller]
    fn fatal(&self, message: &str) {
        Logger::fatal(self, message);
    }

    #[track_caller]
    fn log_with(
        &self,
        severity: Severity,
        options: &LogOptions,
        template: &str,
        args: &[&dyn Display],
    ) {
        Logger::log_with(self, severity, options, template, args);
    }

    #[track_caller]
    fn exception(&self, message: &str, err: &(dyn Error + 'static)) {
        Logger::exception(self, message, err);
    }

    fn is_active(&self) -> bool {
        true
    }
}

/// Surface whose every call does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSurface;

impl LogSurface for NoOpSurface {
    fn log(&self, _level: u8, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn fatal(&self, _message: &str) {}
    fn log_with(&self, _: Severity, _: &LogOptions, _: &str, _: &[&dyn Display]) {}
    fn exception(&self, _message: &str, _err: &(dyn Error + 'static)) {}

    fn is_active(&self) -> bool {
        false
    }
}

static NO_OP: NoOpSurface = NoOpSurface;

impl Logger {
    /// Select the logging surface for a debug threshold.
    ///
    /// Returns this logger when the configured debug gate (the `DEBUG`
    /// environment variable at startup) compares greater than or equal to
    /// `threshold`, otherwise a surface that discards everything. The
    /// comparison is on the decimal strings, so `"2"` passes a threshold of
    /// `10`.
    pub fn lv(&self, threshold: u32) -> &dyn LogSurface {
        if gate_passes(self.debug_gate(), threshold) {
            self
        } else {
            &NO_OP
        }
    }
}

fn gate_passes(gate: &str, threshold: u32) -> bool {
    gate >= threshold.to_string().as_str()
}
