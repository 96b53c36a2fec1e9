//! ECS components for hecs entities.
//!
//! Components are plain data structs with no logic.
//! Steering lives in `flockwork-behaviors`; systems live in `flockwork-sim`.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Whether an entity takes part in the simulation this frame.
///
/// Inactive entities are neither integrated nor visible in world
/// snapshots. Deactivation never despawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Self(true)
    }
}

/// Marks the directly controlled player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Direct external control parameters for the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerControl {
    /// Speed applied along each pressed axis.
    pub speed: f64,
}

/// Seeks a fixed point at constant speed. Used by homing enemies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Homing {
    pub point: Position,
    pub speed: f64,
}
