//! Configuration loading
//!
//! Reads `~/.config/career-mentor/config.toml`. A missing file means defaults;
//! a broken one means defaults plus a warning the UI shows at startup.

mod types;

use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_MAX_TOKENS, DEFAULT_MOCK_DELAY_MS, DEFAULT_MODEL, DEFAULT_NOTIFICATION_MS,
    DEFAULT_TEMPERATURE, MentorConfig, MentorMode, NotificationConfig, OpenAiConfig,
};

use crate::error::MentorError;

/// Outcome of loading the config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Default config file location
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("career-mentor").join("config.toml"))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => load_config_from_path(&path),
        None => {
            log::debug!("No home directory, using default config");
            ConfigResult {
                config: Config::default(),
                warning: None,
            }
        }
    }
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        log::debug!("Config file {} not found, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, MentorError> {
    let contents = std::fs::read_to_string(path).map_err(|source| MentorError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| MentorError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
