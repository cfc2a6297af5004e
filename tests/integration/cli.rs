// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Integration Test for the `glogcheck` binary.

use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

/// **Passing Test:** `emit` writes one parseable glog line to stderr.
#[test]
fn test_emit_writes_glog_line() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_glogcheck"))
        .env_remove("GLOG_VERBOSITY")
        .args(["emit", "--severity", "warning", "disk", "almost", "full"])
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    let line = stderr.trim_end();
    assert!(line.starts_with('W'), "got {:?}", line);
    assert!(line.contains(" main.rs:"));
    assert!(line.ends_with("] disk almost full"));
    Ok(())
}

/// **Passing Test:** messages below the verbosity never reach stderr.
#[test]
fn test_emit_respects_verbosity() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_glogcheck"))
        .args(["--verbosity", "error", "emit", "--severity", "info", "quiet"])
        .output()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    Ok(())
}

/// **Passing Test:** `parse` turns prefixed lines into JSON and skips the rest.
#[test]
fn test_parse_prints_json() -> Result<()> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_glogcheck"))
        .arg("parse")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    child.stdin.take().unwrap().write_all(
        b"E0115 09:08:07.000123 4242 server.rs:88] accept failed\n\
          not a log line\n\
          I1231 23:59:59.999999 ????? <stdin>:1] hello\n",
    )?;

    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["severity"], "E");
    assert_eq!(records[0]["month"], 1);
    assert_eq!(records[0]["microsecond"], 123);
    assert_eq!(records[0]["process_id"], 4242);
    assert_eq!(records[0]["filename"], "server.rs");
    assert_eq!(records[0]["line"], 88);
    assert_eq!(records[0]["message"], "accept failed");

    assert!(records[1]["process_id"].is_null());
    assert_eq!(records[1]["filename"], "<stdin>");
    Ok(())
}

/// **Passing Test:** an unknown verbosity name is rejected at startup.
#[test]
fn test_invalid_verbosity_fails() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_glogcheck"))
        .args(["--verbosity", "shouting", "emit", "x"])
        .output()?;

    assert!(!output.status.success());
    Ok(())
}
