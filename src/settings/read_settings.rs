use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Rendering preferences loaded from the user's `settings.toml`.
///
/// Only presentation concerns live here; operation inputs always come from
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// chrono format string used when rendering modification times.
    pub timestamp_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            // same shape as the C library's ctime() rendering
            timestamp_format: "%a %b %e %H:%M:%S %Y".to_string(),
        }
    }
}

/// Load settings from `settings.toml` in the user config directory.
///
/// A missing file falls back to defaults silently. A malformed file is
/// reported at warn level and also falls back, so a bad settings file never
/// prevents the program from running.
pub fn load_settings() -> Settings {
    match super::config_dirs::project_config_dir() {
        Some(dir) => load_from(&dir.join("settings.toml")),
        None => Settings::default(),
    }
}

fn load_from(path: &Path) -> Settings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Settings::default(),
    };
    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("ignoring malformed settings file {}: {err}", path.display());
            Settings::default()
        }
    }
}
