//! Root configuration types and loading functions.
//!
//! Contains the main `DockdConfig` struct and configuration file loading utilities.

use std::fs;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::constants::{config as config_consts, desktop_entry, legacy, settings};

/// Root configuration structure for dockd.
///
/// Every field is optional; unset paths fall back to the XDG locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DockdConfig {
    /// Settings file holding the docked application list.
    /// Default: `~/.config/dockd/settings.json`
    pub settings_file: Option<String>,

    /// Legacy dock key file migrated on first start.
    /// Default: `~/.config/dock/apps.ini`
    pub legacy_config_file: Option<String>,

    /// Directory for desktop entries synthesized for applications that are
    /// not installed.
    /// Default: `~/.local/share/dockd/scratch`
    pub scratch_dir: Option<String>,

    /// Directories searched for desktop entries, in priority order.
    /// Default: `~/.local/share/applications` followed by every
    /// `$XDG_DATA_DIRS` entry's `applications` directory.
    pub application_dirs: Vec<String>,
}

fn expand(path: &str) -> PathBuf { PathBuf::from(shellexpand::tilde(path).as_ref()) }

fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn user_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl DockdConfig {
    /// Resolved settings file path.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings_file.as_deref().map_or_else(
            || user_config_dir().join("dockd").join(settings::FILE_NAME),
            expand,
        )
    }

    /// Resolved legacy key file path.
    #[must_use]
    pub fn legacy_config_path(&self) -> PathBuf {
        self.legacy_config_file.as_deref().map_or_else(
            || user_config_dir().join(legacy::DIR).join(legacy::FILE_NAME),
            expand,
        )
    }

    /// Resolved scratch directory.
    #[must_use]
    pub fn scratch_path(&self) -> PathBuf {
        self.scratch_dir.as_deref().map_or_else(
            || user_data_dir().join("dockd").join(config_consts::SCRATCH_DIR),
            expand,
        )
    }

    /// Resolved desktop entry directories, without duplicates.
    #[must_use]
    pub fn application_paths(&self) -> Vec<PathBuf> {
        let candidates: Vec<PathBuf> = if self.application_dirs.is_empty() {
            let data_dirs = std::env::var("XDG_DATA_DIRS")
                .ok()
                .filter(|dirs| !dirs.trim().is_empty())
                .unwrap_or_else(|| desktop_entry::DEFAULT_DATA_DIRS.to_string());

            std::iter::once(user_data_dir())
                .chain(data_dirs.split(':').filter(|dir| !dir.is_empty()).map(PathBuf::from))
                .map(|dir| dir.join(desktop_entry::APPLICATIONS_DIR))
                .collect()
        } else {
            self.application_dirs.iter().map(|dir| expand(dir)).collect()
        };

        let mut paths = Vec::with_capacity(candidates.len());
        for path in candidates {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at $XDG_CONFIG_HOME/dockd/config.json \
                or ~/.config/dockd/config.json"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &[config_consts::CONFIG_FILE, config_consts::CONFIG_FILE_ALT];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/dockd/config.jsonc` or `config.json`, if the variable is set
/// 2. `~/.config/dockd/config.jsonc` or `config.json`
/// 3. The platform config dir from `dirs::config_dir()`, if different
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_check = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            dirs_to_check.push(PathBuf::from(xdg_config).join("dockd"));
        }
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_check.push(home.join(".config").join("dockd"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_check.push(config_dir.join("dockd"));
    }

    let mut paths = Vec::new();
    for dir in dirs_to_check {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

/// Loads the configuration from a specific file path.
///
/// The file may contain `//` and `/* */` comments.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it could not be read, and
/// `ConfigError::ParseError` if it is not valid JSON.
pub fn load_config_from_path(path: &PathBuf) -> Result<(DockdConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: DockdConfig = serde_json::from_reader(reader)?;
    Ok((config, path.clone()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists, or the
/// error from [`load_config_from_path`] for the first file found.
pub fn load_config() -> Result<(DockdConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads the configuration, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns an error only when a configuration file exists but is unusable.
pub fn load_config_or_default() -> Result<DockdConfig, ConfigError> {
    match load_config() {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        Err(ConfigError::NotFound) => Ok(DockdConfig::default()),
        Err(err) => Err(err),
    }
}
