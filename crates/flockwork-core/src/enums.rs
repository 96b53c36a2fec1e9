//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What an entity is, for the renderer's benefit.
///
/// Also attached as an ECS component so snapshots can label entities
/// without inspecting their behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRole {
    Player,
    Enemy,
    Wanderer,
    Chaser,
    Boid,
}

/// The closed set of steering behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    Wander,
    Pursuit,
    Flocking,
}
