// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster's configuration, including loading and saving
//! the default toast settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//! use iced_toaster::ui::notifications::Position;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::Left);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.position, Some(Position::Left));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::{Align, Position};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToaster";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Auto-dismiss delay in milliseconds. Zero means "use the default".
    #[serde(default, deserialize_with = "lenient")]
    pub duration_ms: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<Position>,
    #[serde(default, deserialize_with = "lenient")]
    pub align: Option<Align>,
}

/// Reads one optional field, leaving it unset when its value doesn't parse so
/// the rest of the file still applies.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = toml::Value::deserialize(deserializer)?;
    match value.clone().try_into::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            log::warn!("ignoring config value {value}: {err}");
            Ok(None)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_DURATION_MS),
            position: Some(Position::default()),
            align: Some(Align::default()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring malformed config {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
