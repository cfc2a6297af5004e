// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Stack capture and rendering for failed checks.
//!
//! [`capture_trace`] walks the live stack with the `backtrace` crate, cuts
//! everything from the capture routine inward, then drops a caller-supplied
//! number of further frames (the reporting machinery). What remains is
//! returned outermost first, so the last frame is the failure site.

use super::format::basename;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Symbol path of the capture routine, used to find where the caller's
/// frames begin regardless of how deep the backtrace library itself goes.
const CAPTURE_SYMBOL: &str = "stack::capture_trace";

/// File reported for frames resolved without debug info
const UNKNOWN_FILE: &str = "<unknown>";

/// One frame of a captured call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub file_path: String,
    /// Demangled symbol path without the hash suffix
    pub function_name: String,
    pub line_number: u32,
    /// Trimmed source line, empty when the file is not readable
    pub source_text: String,
}

struct RawFrame {
    name: Option<String>,
    file: Option<String>,
    line: Option<u32>,
}

/// Capture the current call stack, outermost frame first.
///
/// Frames belonging to the capture routine and the backtrace library are
/// always removed; `skip` further innermost frames are dropped after that.
/// A check reporter passes the number of frames between itself and the
/// failure site (inclusive of itself).
#[inline(never)]
pub fn capture_trace(skip: usize) -> Vec<StackFrame> {
    let mut raw: Vec<RawFrame> = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            raw.push(RawFrame {
                name: symbol.name().map(|name| format!("{:#}", name)),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        });
        true
    });

    frames_from_raw(raw, skip)
}

/// Turn resolved symbols (innermost first) into frames (outermost first).
///
/// Frames without debug info keep their symbol name and are rendered with an
/// `<unknown>` file and line 0, so optimized builds still produce a trace.
fn frames_from_raw(raw: Vec<RawFrame>, skip: usize) -> Vec<StackFrame> {
    let start = raw
        .iter()
        .position(|f| f.name.as_deref().is_some_and(|n| n.ends_with(CAPTURE_SYMBOL)))
        .map_or(0, |idx| idx + 1);

    let mut frames: Vec<StackFrame> = raw
        .into_iter()
        .skip(start)
        .skip(skip)
        .filter_map(|f| {
            let name = f.name?;
            let frame = match (f.file, f.line) {
                (Some(file), Some(line)) => StackFrame {
                    source_text: read_source_line(Path::new(&file), line),
                    file_path: file,
                    function_name: name,
                    line_number: line,
                },
                _ => StackFrame {
                    file_path: UNKNOWN_FILE.to_string(),
                    function_name: name,
                    line_number: 0,
                    source_text: String::new(),
                },
            };
            Some(frame)
        })
        .collect();
    frames.reverse();
    frames
}

/// Render frames as `\t<file>::<function>:<line>\t<source>` lines
pub fn render(frames: &[StackFrame]) -> Vec<String> {
    frames
        .iter()
        .map(|frame| {
            format!(
                "\t{}::{}:{}\t{}",
                basename(&frame.file_path),
                short_function_name(&frame.function_name),
                frame.line_number,
                frame.source_text
            )
        })
        .collect()
}

/// Last path segment of a demangled symbol.
///
/// Trailing generic argument lists (`::<T, U>`) and closure or shim segments
/// (`::{closure#0}`, `::{{closure}}`) are removed first, so
/// `std::panicking::catch_unwind::<i32, String>` becomes `catch_unwind`.
fn short_function_name(full: &str) -> &str {
    let mut name = full;
    while let Some(stripped) = strip_generic_args(name).or_else(|| strip_brace_segment(name)) {
        name = stripped;
    }
    last_segment(name)
}

/// Remove a balanced `<...>` list at the end of `name`, with its `::`
fn strip_generic_args(name: &str) -> Option<&str> {
    if !name.ends_with('>') {
        return None;
    }
    let mut depth = 0usize;
    for (idx, c) in name.char_indices().rev() {
        match c {
            '>' if !name[..idx].ends_with('-') => depth += 1,
            '<' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    let head = name[..idx].trim_end_matches("::");
                    // `<T as Trait>` on its own is the whole name
                    return (!head.is_empty()).then_some(head);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove a trailing `::{...}` segment such as `::{closure#0}`
fn strip_brace_segment(name: &str) -> Option<&str> {
    if !name.ends_with('}') {
        return None;
    }
    let idx = name.rfind("::{")?;
    (!name[idx + 3..].contains("::") && idx > 0).then(|| &name[..idx])
}

/// Text after the last `::` outside angle brackets
fn last_segment(name: &str) -> &str {
    let bytes = name.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    &name[start..]
}

fn read_source_line(path: &Path, line: u32) -> String {
    let Some(index) = (line as usize).checked_sub(1) else {
        return String::new();
    };
    File::open(path)
        .ok()
        .and_then(|file| BufReader::new(file).lines().nth(index))
        .and_then(Result::ok)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
