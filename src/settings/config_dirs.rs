use std::path::PathBuf;

use directories_next::ProjectDirs;

/// Per-user configuration directory for this program, when the platform can
/// provide one (e.g. `~/.config/filekit` on Linux).
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "filekit").map(|dirs| dirs.config_dir().to_path_buf())
}
