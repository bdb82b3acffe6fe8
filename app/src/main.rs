use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fileScout::app::settings::{load_settings, load_settings_from};
use fileScout::logging::init_logging;
use fileScout::runner::run_app;

/// Interactive menu-driven file explorer.
///
/// Runs without arguments; the flags only adjust startup.
#[derive(Debug, Parser)]
#[command(name = "fileScout", version, about)]
struct Cli {
    /// Settings file to use instead of the per-user default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `fileScout=trace`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Directory the session starts in.
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings().context("failed to load settings")?,
    };
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(dir) = cli.start_dir {
        settings.start_dir = Some(dir);
    }

    let _guard = init_logging(&settings.logging)?;
    run_app(&settings)
}
