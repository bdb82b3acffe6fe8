use std::fs;
use std::path::Path;

use anyhow::Context;

use super::{settings_path, Settings};

/// Parse settings from TOML text. Missing keys take their defaults.
pub fn parse_settings(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
}

/// Load settings from an explicitly named file. The file must exist.
pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("invalid settings file {}", path.display()))
}

/// Load settings from the default per-user location, falling back to
/// defaults when there is no config directory or no file in it.
pub fn load_settings() -> anyhow::Result<Settings> {
    match settings_path() {
        Some(p) if p.is_file() => load_settings_from(&p),
        _ => Ok(Settings::default()),
    }
}
