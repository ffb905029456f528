use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".subtrack";
const HOME_ENV: &str = "SUBTRACK_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Resolves the on-disk locations used by the tracker.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.subtrack`.
    ///
    /// `SUBTRACK_HOME` overrides the default.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Uses `explicit` when provided, otherwise [`PathResolver::base_dir`].
    pub fn resolve_base(explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(Self::base_dir)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
