// SPDX-License-Identifier: Apache-2.0 OR MIT
//! glog-style logging for Rust.
//!
//! - fixed glog line prefix: `I0102 03:04:05.000006 1234 main.rs:42] message`
//! - sampling and first-N rate limiting per message template
//! - CHECK primitives that log the failure and a readable stack trace, then
//!   return [`CheckFailure`]
//!
//! ```no_run
//! use glogcheck::{check_le, log_info, LogConfig, Logger};
//!
//! fn reserve(logger: &Logger, n: usize) -> Result<(), glogcheck::CheckFailure> {
//!     check_le!(logger, n, 1024, "reservation of {} too large", n)?;
//!     log_info!(logger, "reserved {} slots", n);
//!     Ok(())
//! }
//!
//! let logger = glogcheck::logging::init(&LogConfig::default());
//! reserve(&logger, 16).unwrap();
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigError, LogArgs, LogConfig, SinkTarget};
pub use logging::{
    CheckFailure, LogOptions, LogSink, LogSurface, Logger, MemorySink, Severity,
};
