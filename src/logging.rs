//! Tracing subscriber setup.

use crate::config::AppConfig;
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for commands that print to stdout.
    Stderr,
    /// The configured log file, for the terminal UI.
    File,
}

/// Installs the global subscriber.
///
/// Must run before any instrumented entry point is called, or that
/// span is created disabled. `RUST_LOG` overrides the configured filter.
///
/// # Errors
///
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init_tracing(config: &AppConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File => {
            let file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
