// SPDX-License-Identifier: Apache-2.0 OR MIT
use anyhow::{Context, Result};
use clap::Parser;
use glogcheck::logging::{self, LogPrefix, Severity};
use glogcheck::{LogArgs, LogConfig};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug, PartialEq)]
enum Command {
    /// Write one glog line to stderr
    Emit {
        #[arg(long, default_value = "info", value_parser = parse_severity)]
        severity: Severity,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Read log lines from stdin and print their prefixes as JSON
    Parse,
}

fn parse_severity(name: &str) -> Result<Severity, String> {
    Severity::from_name(name).ok_or_else(|| format!("unknown severity {:?}", name))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args
        .log
        .apply(LogConfig::from_env().context("reading logging environment")?);
    let logger = logging::init(&config);

    match args.command {
        Command::Emit { severity, message } => {
            logger.log(severity.as_u8(), &message.join(" "));
        }
        Command::Parse => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            for line in stdin.lock().lines() {
                let line = line.context("reading stdin")?;
                if let Some(prefix) = LogPrefix::parse(&line) {
                    serde_json::to_writer(&mut stdout, &prefix)?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}
