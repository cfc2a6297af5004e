// SPDX-License-Identifier: Apache-2.0 OR MIT
// Severity levels for logging (glog-style, numeric values follow the usual level table)

use serde::{Deserialize, Serialize};

/// Log severity levels (higher is more severe)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Verbose diagnostics, stack trace lines of failed checks
    Debug = 10,
    /// Normal operation
    Info = 20,
    /// Something unexpected that the program recovers from
    Warning = 30,
    /// Operation failed
    Error = 40,
    /// Failed checks and unrecoverable conditions (CRITICAL is an alias)
    Fatal = 50,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Get severity level as its numeric value
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get severity name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Single-letter prefix used at the start of every log line
    pub const fn letter(self) -> char {
        match self {
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
            Severity::Fatal => 'F',
        }
    }

    /// Create from a numeric level (returns None if it names no severity)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            10 => Some(Severity::Debug),
            20 => Some(Severity::Info),
            30 => Some(Severity::Warning),
            40 => Some(Severity::Error),
            50 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Look up a severity by name, case-insensitively.
    ///
    /// Accepts the aliases `WARN` and `CRITICAL`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Severity::Debug),
            "INFO" => Some(Severity::Info),
            "WARN" | "WARNING" => Some(Severity::Warning),
            "ERROR" => Some(Severity::Error),
            "FATAL" | "CRITICAL" => Some(Severity::Fatal),
            _ => None,
        }
    }
}

/// Letter for a raw numeric level; levels that name no severity render as `?`
pub fn level_letter(level: u8) -> char {
    Severity::from_u8(level).map_or('?', Severity::letter)
}

/// Display name for a raw numeric level (`Level 25` for unnamed levels)
pub fn level_name(level: u8) -> String {
    match Severity::from_u8(level) {
        Some(severity) => severity.as_str().to_string(),
        None => format!("Level {}", level),
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
