//! Game configuration
//!
//! Settings are read from `<config dir>/bones/config.json` when that file
//! exists. Every field has a default, so a config file only needs the
//! values it wants to change:
//!
//! ```json
//! {
//!     "starting_dust": 500,
//!     "starting_items": [{ "name": "Full Restore", "quantity": 3 }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A catalog item granted at character creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u16,
}

fn default_quantity() -> u16 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Dust the character starts with
    pub starting_dust: u32,

    pub max_health: u32,
    pub max_mana: u32,

    /// Weapon added to the inventory and equipped at creation
    pub starting_weapon: String,

    /// Extra items added after the starting weapon
    pub starting_items: Vec<StartingItem>,

    /// Optional JSON catalog replacing the built-in items
    pub catalog_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_dust: 15,
            max_health: 100,
            max_mana: 50,
            starting_weapon: "Stick".to_string(),
            starting_items: vec![StartingItem {
                name: "Normal Health Potion".to_string(),
                quantity: 2,
            }],
            catalog_path: None,
        }
    }
}

impl GameConfig {
    /// Loads a config from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("bones"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.json")
    }

    /// Loads the config from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::default_path())
    }

    /// Loads the config from `path`, falling back to defaults
    ///
    /// A missing file is normal. A broken one is logged and ignored so
    /// that a bad edit never keeps the game from starting.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
