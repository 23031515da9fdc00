//! Configuration file handling for hexpix.
//!
//! Loads defaults from `<config dir>/hexpix/config.toml` or a custom path.
//! Command-line flags always win over values found here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pixels::ChannelMode;

/// Configuration file structure.
///
/// ```toml
/// [convert]
/// mode = "gray"
///
/// [viewer]
/// mode = "bgr"
/// auto_refresh = true
/// refresh_rate = 2.0
/// ```
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConvertConfig {
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub auto_refresh: Option<bool>,
    #[serde(default)]
    pub refresh_rate: Option<f64>,
}

impl ConvertConfig {
    pub fn channel_mode(&self) -> Result<Option<ChannelMode>, ConfigError> {
        parse_mode(self.mode.as_deref())
    }
}

impl ViewerConfig {
    pub fn channel_mode(&self) -> Result<Option<ChannelMode>, ConfigError> {
        parse_mode(self.mode.as_deref())
    }
}

fn parse_mode(mode: Option<&str>) -> Result<Option<ChannelMode>, ConfigError> {
    match mode {
        None => Ok(None),
        Some(name) => ChannelMode::from_name(name)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "mode",
                value: name.to_string(),
            }),
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the default config. An explicit path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for '{}' in config file", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("hexpix").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/hexpix/config.toml")
        })
}
