//! Tracing subscriber setup
//!
//! `CONTRIBGRAPH_LOG` sets the filter (default `warn`). The TUI owns the
//! terminal, so interactive runs only log when `CONTRIBGRAPH_LOG_FILE` is set.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

const FILTER_ENV: &str = "CONTRIBGRAPH_LOG";
const FILE_ENV: &str = "CONTRIBGRAPH_LOG_FILE";
const DEFAULT_FILTER: &str = "warn";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr (non-interactive commands)
    Stderr,
    /// Log file from `CONTRIBGRAPH_LOG_FILE`, or nothing
    FileOnly,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(target: LogTarget) {
    let file_path = std::env::var(FILE_ENV).ok();

    match (target, file_path) {
        (_, Some(path)) => match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                let _ = fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .try_init();
            }
            Err(e) => {
                eprintln!("[contribgraph] Warning: cannot open log file {}: {}", path, e);
            }
        },
        (LogTarget::Stderr, None) => {
            let _ = fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        (LogTarget::FileOnly, None) => {}
    }
}
