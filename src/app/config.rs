//! Kernel configuration (`firekit.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::paths::config_file;
use crate::domain::{ClassName, Error};

/// Kernel configuration loaded from `firekit.toml` at the workspace root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FrameworkConfig {
    pub paths: PathsConfig,
    #[serde(default)]
    pub preload: PreloadConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Root of the framework class tree; registry paths live under it.
    pub framework_root: PathBuf,
    /// Root of the application tree; search roots live under it.
    pub app_root: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PreloadConfig {
    /// Classes loaded eagerly at boot.
    #[serde(default)]
    pub classes: Vec<ClassName>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// File the kernel logger appends to.
    pub file: PathBuf,
}

impl FrameworkConfig {
    /// Load the config for the workspace rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = config_file(root);
        if !path.exists() {
            return Err(Error::ConfigMissing);
        }
        let text = fs::read_to_string(&path)?;
        Self::from_toml(&text)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(|err| Error::ConfigInvalid(err.to_string()))
    }

    /// Framework root resolved against the workspace root.
    pub fn framework_root(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.framework_root)
    }

    /// App root resolved against the workspace root.
    pub fn app_root(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.app_root)
    }

    /// Log file resolved against the workspace root.
    pub fn log_file(&self, root: &Path) -> PathBuf {
        root.join(&self.logging.file)
    }
}
