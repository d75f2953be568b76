//! Game settings and preferences
//!
//! Persisted separately from the score record, as a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::PersistenceError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Score record file
    pub save_path: PathBuf,
    /// Spawner RNG seed (None = pick one at startup)
    pub seed: Option<u64>,
    /// Frame deltas are clamped to this many seconds
    pub max_frame_dt: f32,

    // === Audio ===
    /// Start with music and effects muted
    pub start_muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("gamedata.json"),
            seed: None,
            max_frame_dt: 0.1,

            start_muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Clamp a wall-clock frame delta
    pub fn frame_dt(&self, raw: f32) -> f32 {
        raw.clamp(0.0, self.max_frame_dt)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file, using defaults");
                return Self::default();
            }
            Err(e) => {
                log::warn!(
                    "Could not read settings {}: {}, using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Invalid settings file {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
