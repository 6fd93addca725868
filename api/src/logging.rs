//! Tracing setup
//!
//! Events go to stdout and to a daily rolling `citiesinfo.<date>.txt` file
//! under the configured log directory.

use std::path::Path;

use anyhow::Context;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub const LOG_FILE_PREFIX: &str = "citiesinfo";
pub const LOG_FILE_SUFFIX: &str = "txt";

const DEFAULT_FILTER: &str = "info,cityinfo_api=debug";

/// Non-blocking writer for the daily log file in `dir`
fn file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .context("Failed to open the rolling log file")?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop, so keep it alive
/// for the life of the process.
pub fn init(config: &Config) -> anyhow::Result<WorkerGuard> {
    let (file, guard) = file_writer(&config.log_dir)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file))
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
