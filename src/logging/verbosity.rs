// SPDX-License-Identifier: Apache-2.0 OR MIT
// Verbosity level parsing for command-line flags, environment and config files

use super::Severity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerbosityError {
    #[error("Unknown level: {0:?}")]
    UnknownLevel(String),

    #[error("Level {0} is outside 0-255")]
    OutOfRange(i64),
}

/// Parse a verbosity value.
///
/// Numbers are taken as raw levels (`10` is DEBUG, `20` INFO, ...). Anything
/// that does not parse as a number is looked up as a level name.
pub fn parse_verbosity(arg: &str) -> Result<u8, VerbosityError> {
    match arg.trim().parse::<i64>() {
        Ok(level) => u8::try_from(level).map_err(|_| VerbosityError::OutOfRange(level)),
        Err(_) => Severity::from_name(arg)
            .map(Severity::as_u8)
            .ok_or_else(|| VerbosityError::UnknownLevel(arg.to_string())),
    }
}
