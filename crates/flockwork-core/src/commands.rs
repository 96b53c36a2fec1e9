//! Commands sent into the simulation from outside the frame loop.
//!
//! Commands are queued and applied at the next tick boundary, so structural
//! changes never happen while agents are reading a world snapshot.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// All possible external actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Direct control ---
    /// Set the player's movement direction. Each axis is clamped to [-1, 1].
    SetPlayerInput { x: f64, y: f64 },

    // --- Agent control ---
    /// Point a pursuit agent at a new target.
    SetTarget { agent: EntityId, target: EntityId },
    /// Drop a pursuit agent's target.
    ClearTarget { agent: EntityId },
    /// Enable or disable an agent's updates.
    SetAgentActive { agent: EntityId, active: bool },

    // --- Entity lifecycle ---
    /// Activate or deactivate an entity without despawning it.
    SetEntityActive { entity: EntityId, active: bool },
    /// Remove an entity from the world.
    Despawn { entity: EntityId },
}
