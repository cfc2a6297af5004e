// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Logging configuration.
//!
//! Sources, in the order applications usually layer them:
//! - [`LogConfig::default`]: INFO, warnings captured, stderr
//! - JSON5 file via [`LogConfig::load_from_file`] (comments and trailing commas allowed)
//! - environment via [`LogConfig::from_env`] (`DEBUG`, `GLOG_VERBOSITY`)
//! - command line via [`LogArgs`], flattened into the application's clap parser

use crate::logging::{parse_verbosity, Severity, VerbosityError};
use clap::ArgAction;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the debug gate compared by `Logger::lv`
pub const DEBUG_GATE_ENV: &str = "DEBUG";

/// Environment variable holding the verbosity (number or level name)
pub const VERBOSITY_ENV: &str = "GLOG_VERBOSITY";

/// Where log lines are written
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkTarget {
    #[default]
    Stderr,
    Stdout,
}

/// Logging configuration (JSON5 file format)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level emitted; a number or a level name in files
    #[serde(deserialize_with = "deserialize_level")]
    pub verbosity: u8,

    /// Route `log` crate warnings into the WARN path
    pub capture_warnings: bool,

    /// Value compared against `Logger::lv` thresholds
    pub debug_gate: String,

    /// Render the process id (otherwise `?????`)
    pub log_process_id: bool,

    pub target: SinkTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: Severity::Info.as_u8(),
            capture_warnings: true,
            debug_gate: "0".to_string(),
            log_process_id: true,
            target: SinkTarget::Stderr,
        }
    }
}

impl LogConfig {
    /// Load configuration from a JSON5 file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON5 string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(gate) = lookup(DEBUG_GATE_ENV) {
            self.debug_gate = gate;
        }
        if let Some(level) = lookup(VERBOSITY_ENV) {
            self.verbosity = parse_verbosity(&level).map_err(|e| ConfigError::InvalidVerbosity {
                origin: VERBOSITY_ENV.to_string(),
                error: e,
            })?;
        }
        Ok(self)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Level {
        Number(u8),
        Name(String),
    }

    match Level::deserialize(deserializer)? {
        Level::Number(level) => Ok(level),
        Level::Name(name) => parse_verbosity(&name).map_err(serde::de::Error::custom),
    }
}

/// Startup options shared by every binary that logs through this crate
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct LogArgs {
    /// Logging verbosity (number or level name)
    #[arg(long, env = VERBOSITY_ENV, default_value = "INFO", value_parser = parse_verbosity)]
    pub verbosity: u8,

    /// Redirect library warnings to the WARN log path
    #[arg(
        long = "glog-capture-warnings",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub capture_warnings: bool,
}

impl LogArgs {
    /// Override `config` with the parsed command-line values
    pub fn apply(&self, mut config: LogConfig) -> LogConfig {
        config.verbosity = self.verbosity;
        config.capture_warnings = self.capture_warnings;
        config
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {}", .0.display(), .1)]
    IoError(PathBuf, String),

    #[error("failed to parse config: {0}")]
    ParseError(String),

    /// `origin` names where the value came from (env variable, flag)
    #[error("invalid verbosity in {origin}: {error}")]
    InvalidVerbosity {
        origin: String,
        #[source]
        error: VerbosityError,
    },
}
