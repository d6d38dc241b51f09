use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Wrapper for 'dirs' that treats MacOS more like Linux, by following the XDG specification.
/// The `XDG_CONFIG_HOME` environment variable is checked first on MacOS.
/// The fallback directory is `~/.config/man2md`.
pub struct ProjectDirs {
    config_dir: PathBuf,
}

impl ProjectDirs {
    fn new() -> Option<ProjectDirs> {
        #[cfg(target_os = "macos")]
        let config_dir_op = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs_next::home_dir().map(|d| d.join(".config")));

        #[cfg(not(target_os = "macos"))]
        let config_dir_op = dirs_next::config_dir();

        Some(ProjectDirs {
            config_dir: config_dir_op.map(|d| d.join("man2md"))?,
        })
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

/// `None` when no home directory can be determined
pub static PROJECT_DIRS: Lazy<Option<ProjectDirs>> = Lazy::new(ProjectDirs::new);
