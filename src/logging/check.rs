// SPDX-License-Identifier: Apache-2.0 OR MIT
//! CHECK primitives.
//!
//! Each check evaluates a condition and, when it does not hold, reports the
//! failure through the logger and returns [`CheckFailure`]:
//!
//! 1. one FATAL record with the failure message,
//! 2. a DEBUG `Check failed here:` record,
//! 3. one DEBUG record per stack frame, outermost first, ending at the
//!    caller of the check.
//!
//! Every record is attributed to the file and line that called the check.
//! Failure records bypass the verbosity level so they are always visible.
//! The error is returned to the caller; nothing here swallows it.

use super::stack::{capture_trace, render};
use super::{Logger, Severity};
use std::fmt::Display;
use std::panic::Location;
use thiserror::Error;

/// Frames between the capture routine and the failure site: the failure
/// reporter and the check method itself.
const CHECK_MACHINERY_FRAMES: usize = 2;

const FAILED_HERE: &str = "Check failed here:";

/// A check did not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CheckFailure {
    pub message: String,
    /// Source file of the failed check's caller
    pub file: &'static str,
    pub line: u32,
}

impl Logger {
    /// Fail unless `condition` holds
    #[track_caller]
    #[inline(never)]
    pub fn check(&self, condition: bool, message: Option<&str>) -> Result<(), CheckFailure> {
        if !condition {
            let message = message.map_or_else(|| "Check failed.".to_string(), str::to_string);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail if `a != b`
    #[track_caller]
    #[inline(never)]
    pub fn check_eq<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialEq<B> + Display,
        B: Display,
    {
        if a != b {
            let message = default_message(message, &a, "!=", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail if `a == b`
    #[track_caller]
    #[inline(never)]
    pub fn check_ne<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialEq<B> + Display,
        B: Display,
    {
        if a == b {
            let message = default_message(message, &a, "==", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail unless `a <= b`
    #[track_caller]
    #[inline(never)]
    pub fn check_le<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialOrd<B> + Display,
        B: Display,
    {
        if a > b {
            let message = default_message(message, &a, ">", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail unless `a >= b`
    #[track_caller]
    #[inline(never)]
    pub fn check_ge<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialOrd<B> + Display,
        B: Display,
    {
        if a < b {
            let message = default_message(message, &a, "<", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail unless `a < b`
    #[track_caller]
    #[inline(never)]
    pub fn check_lt<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialOrd<B> + Display,
        B: Display,
    {
        if a >= b {
            let message = default_message(message, &a, ">=", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail unless `a > b`
    #[track_caller]
    #[inline(never)]
    pub fn check_gt<A, B>(&self, a: A, b: B, message: Option<&str>) -> Result<(), CheckFailure>
    where
        A: PartialOrd<B> + Display,
        B: Display,
    {
        if a <= b {
            let message = default_message(message, &a, "<=", &b);
            return Err(self.check_failed(message, Location::caller()));
        }
        Ok(())
    }

    /// Fail on `None`; on success hands back the contained value
    #[track_caller]
    #[inline(never)]
    pub fn check_notnone<T>(&self, obj: Option<T>, message: Option<&str>) -> Result<T, CheckFailure> {
        match obj {
            Some(value) => Ok(value),
            None => {
                let message = message
                    .map_or_else(|| "Check failed: Object is None.".to_string(), str::to_string);
                Err(self.check_failed(message, Location::caller()))
            }
        }
    }

    /// Report a failed check and build the error.
    ///
    /// Must be called directly from a check method: the trace skips exactly
    /// this frame and the check method's frame.
    #[inline(never)]
    fn check_failed(&self, message: String, location: &'static Location<'static>) -> CheckFailure {
        let (file, line) = (location.file(), location.line());

        self.emit_at(Severity::Fatal.as_u8(), file, line, &message);
        self.emit_at(Severity::Debug.as_u8(), file, line, FAILED_HERE);
        for trace_line in render(&capture_trace(CHECK_MACHINERY_FRAMES)) {
            self.emit_at(Severity::Debug.as_u8(), file, line, &trace_line);
        }

        CheckFailure {
            message,
            file,
            line,
        }
    }
}

fn default_message<A: Display, B: Display>(
    given: Option<&str>,
    a: &A,
    op: &str,
    b: &B,
) -> String {
    match given {
        Some(message) => message.to_string(),
        None => format!("Check failed: {} {} {}", a, op, b),
    }
}
