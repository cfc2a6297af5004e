// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks - the terminal destination of formatted log lines

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// Output sink for formatted log lines
///
/// One call writes one complete line; implementations hold their lock for the
/// whole line so concurrent callers never interleave partial output.
pub trait LogSink: Send + Sync {
    /// Write a line (the sink appends the newline)
    fn emit(&self, line: &str);
}

/// Standard error sink (the default)
///
/// # Panics
///
/// Panics if stderr cannot be written, the same way `eprintln!` does.
pub struct StderrSink {
    stderr: std::io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stderr: std::io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StderrSink {
    fn emit(&self, line: &str) {
        let mut handle = self.stderr.lock();
        if let Err(err) = writeln!(handle, "{}", line) {
            panic!("failed printing log line to stderr: {}", err);
        }
    }
}

/// Standard output sink
///
/// # Panics
///
/// Panics if stdout cannot be written, the same way `println!` does.
pub struct StdoutSink {
    stdout: std::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut handle = self.stdout.lock();
        if let Err(err) = writeln!(handle, "{}", line).and_then(|_| handle.flush()) {
            panic!("failed printing log line to stdout: {}", err);
        }
    }
}

/// Sink over any writer (files, sockets, buffers)
///
/// # Panics
///
/// A failed write is not retried; it panics with the underlying error.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            panic!("failed writing log line: {}", err);
        }
    }
}

/// In-memory sink that keeps every emitted line
///
/// Cloning shares the same buffer, so a clone can be handed to a
/// [`Logger`](super::Logger) while the original is used to inspect output.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the lines emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Number of lines emitted so far
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Drain and return the captured lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        self.guard().push(line.to_string());
    }
}
