//! # Logging Setup
//!
//! Failure reports go through `tracing` on the `soft_asset_loader` target.
//! With the `profiling` feature enabled this module installs a subscriber for
//! them.
//!
//! ```toml
//! [dependencies]
//! soft_asset_loader = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! ```ignore
//! soft_asset_loader::logging::init_logging("soft_asset_loader=debug")?;
//! ```
//!
//! Use `RUST_LOG`-style directives. `trace` on `soft_asset_loader` also shows
//! resident hits when `LoaderConfig::trace_requests` is set.

use std::path::Path;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install a global fmt subscriber filtered by `filter`
pub fn init_logging(filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Install a global subscriber writing JSON lines to a daily rolling file.
///
/// Keep the returned guard alive; dropping it flushes and stops the writer.
pub fn init_json_file_logging(
    directory: impl AsRef<Path>,
    file_prefix: &str,
    filter: &str,
) -> Result<WorkerGuard, LoggingError> {
    let filter = EnvFilter::try_new(filter)?;
    let appender = tracing_appender::rolling::daily(directory, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
        .with(filter)
        .try_init()?;
    Ok(guard)
}
