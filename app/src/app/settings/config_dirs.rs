use std::path::PathBuf;

use directories_next::ProjectDirs;

pub const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, e.g. `~/.config/fileScout` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileScout").map(|d| d.config_dir().to_path_buf())
}

/// Default location of the settings file.
pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
