//! Per-behavior tuning.
//!
//! Consolidates the construction-time parameters of each behavior. Defaults
//! come from `flockwork_core::constants`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flockwork_core::constants::*;

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} must be {requirement}, got {value}")]
pub struct InvalidConfig {
    pub field: &'static str,
    pub requirement: &'static str,
    pub value: f64,
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), InvalidConfig> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfig {
            field,
            requirement: "finite and > 0",
            value,
        })
    }
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), InvalidConfig> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidConfig {
            field,
            requirement: "finite and >= 0",
            value,
        })
    }
}

/// Wander tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    /// Speed of every chosen heading.
    pub speed: f64,
    /// Seconds between heading changes.
    pub direction_change_interval: f64,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            speed: WANDER_SPEED,
            direction_change_interval: WANDER_DIRECTION_CHANGE_INTERVAL,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        require_positive("wander.speed", self.speed)?;
        require_positive(
            "wander.direction_change_interval",
            self.direction_change_interval,
        )
    }
}

/// Pursuit tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitConfig {
    pub speed: f64,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            speed: PURSUIT_SPEED,
        }
    }
}

impl PursuitConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        require_positive("pursuit.speed", self.speed)
    }
}

/// Flocking tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockingConfig {
    pub speed: f64,
    /// Entities strictly closer than this are neighbors.
    pub neighbor_radius: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            speed: FLOCKING_SPEED,
            neighbor_radius: FLOCKING_RADIUS,
            separation_weight: SEPARATION_WEIGHT,
            alignment_weight: ALIGNMENT_WEIGHT,
            cohesion_weight: COHESION_WEIGHT,
        }
    }
}

impl FlockingConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        require_positive("flocking.speed", self.speed)?;
        require_positive("flocking.neighbor_radius", self.neighbor_radius)?;
        require_non_negative("flocking.separation_weight", self.separation_weight)?;
        require_non_negative("flocking.alignment_weight", self.alignment_weight)?;
        require_non_negative("flocking.cohesion_weight", self.cohesion_weight)
    }
}

/// Tuning for all three behaviors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    pub wander: WanderConfig,
    pub pursuit: PursuitConfig,
    pub flocking: FlockingConfig,
}

impl SteeringConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        self.wander.validate()?;
        self.pursuit.validate()?;
        self.flocking.validate()
    }
}
