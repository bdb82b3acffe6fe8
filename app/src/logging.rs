//! Tracing setup. Stdout carries the console protocol, so logs go to stderr
//! or to a file.

use std::path::Path;

use anyhow::{anyhow, Context};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::settings::LoggingSettings;

/// Environment variable whose value, when set, replaces the configured
/// filter.
pub const LOG_ENV: &str = "FILESCOUT_LOG";

/// Build the filter from an optional environment override, falling back to
/// the configured level.
pub fn build_filter(level: &str, env_override: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = match env_override {
        Some(v) if !v.trim().is_empty() => v,
        _ => level,
    };
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter `{}`", directives))
}

/// Install the global subscriber. The returned guard must be kept alive for
/// the lifetime of the process when logging to a file, otherwise buffered
/// lines are lost.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let env_override = std::env::var(LOG_ENV).ok();
    let filter = build_filter(&settings.level, env_override.as_deref())?;

    match &settings.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
            Ok(None)
        }
    }
}
