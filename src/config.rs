// Global configuration for locating photo-disintegration data files
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Global configuration for data file resolution
pub static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::new()));

/// Configuration container for the photo-disintegration module.
///
/// Holds the directory against which the per-background rate table files
/// (`photodis_CMB.txt` etc.) are resolved. The directory is taken from the
/// `PHOTODIS_DATA_DIR` environment variable when set, and defaults to
/// `data/` relative to the working directory.
///
/// A single global instance is exposed via the `CONFIG` static; most code
/// should obtain a guard with [`Config::global`] rather than locking the
/// mutex directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the rate table files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        let data_dir = std::env::var_os("PHOTODIS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        Config { data_dir }
    }

    /// Set the directory that table filenames are resolved against
    pub fn set_data_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.data_dir = dir.as_ref().to_path_buf();
    }

    /// Resolve a table filename against the configured data directory
    pub fn data_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    /// Get the global configuration instance
    pub fn global() -> std::sync::MutexGuard<'static, Self> {
        CONFIG
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
