pub mod config_dirs;
pub mod read_settings;

use std::path::PathBuf;

use serde::Deserialize;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_path};
pub use read_settings::{load_settings, load_settings_from, parse_settings};

/// User settings, read from `settings.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory the session starts in instead of the process cwd.
    pub start_dir: Option<PathBuf>,
    pub logging: LoggingSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `warn` or `fileScout=debug`.
    pub level: String,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    /// Descend through symlinked directories during recursive search.
    pub follow_links: bool,
}
