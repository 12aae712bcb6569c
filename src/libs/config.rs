//! Configuration management for dolist.
//!
//! Settings live in `config.json` inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\dolist\config.json`
//! - **macOS**: `~/Library/Application Support/dolist/config.json`
//! - **Linux**: `~/.local/share/dolist/config.json`
//!
//! A missing file means defaults. Keys missing from an existing file take their
//! default values and unknown keys are ignored, so older files keep working.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dolist::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.storage.slot = "work".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::persistence::{LoadMode, DEFAULT_SLOT};
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default SQLite database file name inside the data directory.
pub const DEFAULT_DATABASE: &str = "dolist.db";

/// Where and how the task list is persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file name, resolved against the data directory unless absolute.
    pub database: String,

    /// Name of the key-value slot holding the serialized list.
    pub slot: String,

    /// What to do with a saved list that cannot be decoded.
    ///
    /// `lenient` starts with an empty list, `strict` refuses to start.
    pub load_mode: LoadMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            database: DEFAULT_DATABASE.to_string(),
            slot: DEFAULT_SLOT.to_string(),
            load_mode: LoadMode::default(),
        }
    }
}

impl StorageConfig {
    /// Absolute path of the database file.
    pub fn database_path(&self) -> Result<PathBuf> {
        let path = PathBuf::from(&self.database);
        if path.is_absolute() {
            return Ok(path);
        }
        Ok(DataStorage::new().get_path(&self.database)?)
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

impl Config {
    /// Reads the configuration file, or returns defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        config.storage.database = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabase.to_string())
            .default(config.storage.database.clone())
            .interact_text()?;

        config.storage.slot = Input::with_theme(&theme)
            .with_prompt(Message::PromptSlot.to_string())
            .default(config.storage.slot.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::SlotNameEmpty.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let modes = [LoadMode::Lenient, LoadMode::Strict];
        let current = modes.iter().position(|mode| *mode == config.storage.load_mode).unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptLoadMode.to_string())
            .items(&["lenient - start empty if saved data is unreadable", "strict - refuse to start"])
            .default(current)
            .interact()?;
        config.storage.load_mode = modes[selected];

        Ok(config)
    }
}
