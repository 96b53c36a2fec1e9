//! Simulation configuration and JSON loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flockwork_behaviors::config::{require_positive, InvalidConfig, SteeringConfig};
use flockwork_core::constants::*;
use flockwork_core::types::Position;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] InvalidConfig),
}

/// Configuration for a simulation run. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    pub player_speed: f64,
    pub player_size: f64,
    pub enemy_speed: f64,
    pub enemy_size: f64,
    /// Boids spawned by the demo scene.
    pub flock_size: usize,
    pub steering: SteeringConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_size: ENEMY_SIZE,
            flock_size: DEMO_FLOCK_SIZE,
            steering: SteeringConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        require_positive("world_width", self.world_width)?;
        require_positive("world_height", self.world_height)?;
        require_positive("player_speed", self.player_speed)?;
        require_positive("player_size", self.player_size)?;
        require_positive("enemy_speed", self.enemy_speed)?;
        require_positive("enemy_size", self.enemy_size)?;
        self.steering.validate()
    }

    /// Centre of the world rectangle.
    pub fn world_center(&self) -> Position {
        Position::new(self.world_width / 2.0, self.world_height / 2.0)
    }
}
