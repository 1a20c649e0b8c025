//! Loading configuration files from disk.
//!
//! Configuration files are named `stylewright.config.<ext>`. When searching a
//! directory, extensions are tried in priority order:
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 (lowest) | `.json` | JSON |
//!
//! If several exist side by side, the highest-priority one wins and the
//! others are ignored.

use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::Config;

/// Base name of configuration files.
pub const CONFIG_FILE_STEM: &str = "stylewright.config";

/// Recognized configuration file extensions in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Document format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    ///
    /// Anything that is not `.json` is read as YAML, which also accepts JSON
    /// documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl Config {
    /// Loads a configuration file.
    ///
    /// The format is chosen from the extension, and the file's directory
    /// becomes the [`root_dir`](Config::root_dir) for content patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read, and any
    /// parsing error from [`Config::from_yaml`] / [`Config::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loading configuration");
        Self::parse(&content, ConfigFormat::from_path(path), Some(path))
    }

    /// Finds and loads the configuration file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no `stylewright.config.*` file
    /// exists in `dir`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::discover(".")?;
    /// ```
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let found = CONFIG_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}{ext}")))
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => Self::from_file(path),
            None => Err(ConfigError::NotFound {
                root: dir.to_path_buf(),
            }),
        }
    }
}
