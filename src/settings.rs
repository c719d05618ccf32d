//! Game settings
//!
//! One JSON document carries the board configuration, audio preferences and
//! an optional fixed seed. Every field is optional; missing ones use defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSettings;
use crate::sim::{ConfigError, GameConfig};

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub audio: AudioSettings,
    /// Fixed seed for peg layouts; random when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)
            .inspect_err(|err| log::warn!("Malformed settings: {err}"))?;
        if let Err(err) = settings.game.validate() {
            log::warn!("Rejected game settings: {err}");
            return Err(err);
        }
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).inspect_err(|err| {
            log::warn!("Could not read settings from {}: {err}", path.display());
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
