use std::fs;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::shell::config::AppConfig;

pub const LOG_FILE_PREFIX: &str = "calendar.log";

/// Installs the global subscriber: stdout always, plus a daily rolling file
/// when a log directory is configured. Keep the returned guard alive for the
/// life of the process or buffered file output is lost.
pub fn init(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = fmt::layer().with_target(false);

    let Some(dir) = &config.log_dir else {
        tracing_subscriber::registry().with(filter).with(stdout).init();
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(Some(guard))
}
