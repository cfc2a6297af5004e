// SPDX-License-Identifier: Apache-2.0 OR MIT
// glog line formatting

use super::event::LogEvent;
use super::severity::level_letter;
use chrono::{Datelike, Timelike};
use std::borrow::Cow;
use std::fmt::{Display, Write};
use std::path::Path;

/// Placeholder replaced by [`interpolate`]
const PLACEHOLDER: &str = "{}";

/// Rendered in place of the process id when none is known
const UNKNOWN_PID: &str = "?????";

/// Render an event as a single glog line (no trailing newline).
///
/// ```text
/// I0102 03:04:05.000006 1234 main.rs:42] message
/// ```
pub fn format_event(event: &LogEvent) -> String {
    let ts = &event.timestamp;
    // Nanoseconds past 1e9 encode a leap second; clamp so micros stay 6 digits.
    let micros = (ts.nanosecond() / 1_000).min(999_999);

    let mut line = String::with_capacity(40 + event.source_file.len() + event.message.len());
    let _ = write!(
        line,
        "{}{:02}{:02} {:02}:{:02}:{:02}.{:06} ",
        level_letter(event.level),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second(),
        micros,
    );
    match event.process_id {
        Some(pid) => {
            let _ = write!(line, "{}", pid);
        }
        None => line.push_str(UNKNOWN_PID),
    }
    let _ = write!(
        line,
        " {}:{}] {}",
        basename(&event.source_file),
        event.source_line,
        event.message
    );
    line
}

/// Final path component, or the input itself when it has none
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Substitute `args` into the `{}` placeholders of `template`.
///
/// Without arguments the template is returned untouched. When the number of
/// placeholders does not match the number of arguments the raw template is
/// returned rather than an error.
pub fn interpolate<'a>(template: &'a str, args: &[&dyn Display]) -> Cow<'a, str> {
    if args.is_empty() || template.matches(PLACEHOLDER).count() != args.len() {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut pieces = template.split(PLACEHOLDER);
    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for (piece, arg) in pieces.zip(args) {
        let _ = write!(out, "{}", arg);
        out.push_str(piece);
    }
    Cow::Owned(out)
}
