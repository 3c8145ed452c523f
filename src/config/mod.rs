use crate::default_config::CONFIG_FILE_NAME;
use crate::tc_error::TcError;
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Connection settings, stored as TOML.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
pub struct TcConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,

    #[serde(default)]
    pub guest: bool,

    pub timeout_secs: Option<u64>,
}

impl TcConfig {
    /// `None` when the file is missing or cannot be parsed.
    pub fn get_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }

    pub fn save(&self, path: &Path) -> Result<(), TcError> {
        let str = toml::to_string(self).map_err(|e| TcError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent).map_err(|e| TcError::Config(e.to_string()))?;
            }
        }

        File::create(path)
            .map_err(|e| TcError::Config(e.to_string()))?
            .write_all(str.as_bytes())
            .map_err(|e| TcError::Config(e.to_string()))
    }

    /// `0` means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// # get config file path
///
/// * `None` - the default file in the home directory.
/// * a directory - the default file name inside it.
/// * anything else - used as the file path.
pub fn get_config_file_path(path: Option<&Path>) -> PathBuf {
    match path {
        None => home_dir().unwrap_or_default().join(CONFIG_FILE_NAME),
        Some(p) if p.is_dir() => p.join(CONFIG_FILE_NAME),
        Some(p) => p.to_path_buf(),
    }
}
