// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Parser for glog line prefixes.
//!
//! Recognizes lines produced by [`format_event`](super::format::format_event)
//! and by other glog implementations, splitting the prefix into its fields.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Regex matching a glog line prefix; the message follows the match.
pub const GLOG_PREFIX_REGEX: &str = r"(?x) ^
    (?P<severity>[DIWEF])
    (?P<month>\d\d)(?P<day>\d\d)\s
    (?P<hour>\d\d):(?P<minute>\d\d):(?P<second>\d\d)
    \.(?P<microsecond>\d{6})\s+
    (?P<process_id>-?\d+|\?{5})\s
    (?P<filename>[a-zA-Z<_][\w._<>-]*):(?P<line>\d+)
    \]\s";

fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant covered by tests.
    RE.get_or_init(|| Regex::new(GLOG_PREFIX_REGEX).expect("GLOG_PREFIX_REGEX is valid"))
}

/// Fields of a parsed glog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPrefix {
    pub severity: char,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
    /// `None` when the line carried the `?????` placeholder
    pub process_id: Option<i64>,
    pub filename: String,
    pub line: u32,
    pub message: String,
}

impl LogPrefix {
    /// Parse a full log line; returns None when the prefix does not match
    pub fn parse(line: &str) -> Option<Self> {
        let caps = prefix_regex().captures(line)?;
        let whole = caps.get(0)?;
        let num = |name: &str| caps.name(name)?.as_str().parse::<u32>().ok();

        let process_id = match caps.name("process_id")?.as_str() {
            "?????" => None,
            pid => Some(pid.parse().ok()?),
        };

        Some(Self {
            severity: caps.name("severity")?.as_str().chars().next()?,
            month: num("month")?,
            day: num("day")?,
            hour: num("hour")?,
            minute: num("minute")?,
            second: num("second")?,
            microsecond: num("microsecond")?,
            process_id,
            filename: caps.name("filename")?.as_str().to_string(),
            line: num("line")?,
            message: line[whole.end()..].to_string(),
        })
    }
}
