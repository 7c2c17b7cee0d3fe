//! Game configuration
//!
//! Everything the simulation would otherwise read from globals: play area
//! size, seed, particle counts and timestep. Passed into each component at
//! construction and optionally loaded from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play area ===
    /// Logical width of the play area
    pub play_width: f32,
    /// Logical height of the play area
    pub play_height: f32,

    // === Determinism ===
    /// Fixed game seed (None = pick one at startup)
    pub seed: Option<u64>,

    // === Background ===
    pub star_count: usize,
    pub fog_count: usize,

    // === Effects ===
    /// Blood particles spawned when the player dies
    pub blood_count: usize,

    // === Timing ===
    /// Simulation timestep per substep
    pub sim_dt: f32,
    /// Substeps per rendered frame
    pub substeps_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,

            seed: None,

            star_count: STAR_COUNT,
            fog_count: FOG_COUNT,

            blood_count: BLOOD_COUNT,

            sim_dt: SIM_DT,
            substeps_per_frame: SUBSTEPS_PER_FRAME,
        }
    }
}

impl GameConfig {
    /// Default config with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The player sprite must fit inside the play area for clamping to work
        if !(self.play_width >= PLAYER_WIDTH && self.play_width.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "play_width",
                reason: "must be finite and at least the player width",
            });
        }
        if !(self.play_height >= PLAYER_HEIGHT && self.play_height.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "play_height",
                reason: "must be finite and at least the player height",
            });
        }
        if !(self.sim_dt > 0.0 && self.sim_dt.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "sim_dt",
                reason: "must be positive and finite",
            });
        }
        if self.substeps_per_frame == 0 {
            return Err(ConfigError::Invalid {
                field: "substeps_per_frame",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Simulated time covered by one rendered frame
    pub fn frame_time(&self) -> f32 {
        self.sim_dt * self.substeps_per_frame as f32
    }
}
